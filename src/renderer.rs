//! Template rendering: the renderer trait, its minijinja implementation and
//! the filters registered with it.

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
