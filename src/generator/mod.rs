//! Writing the output tree.
//!
//! - `project`: renders the templates of the selected category; any failure aborts
//! - `shared`: propagates the `shared` directory, copying files that do not render

pub mod generated;
pub mod project;
pub mod shared;

pub use generated::{GeneratedFile, Production};
pub use project::ProjectFileGenerator;
pub use shared::SharedFileProcessor;
