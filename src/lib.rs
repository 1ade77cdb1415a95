/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Project categories offered by the template library.
pub mod category;

/// Loading template variables from JSON files.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Writing rendered and copied files into the output tree.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Template library layout, discovery and output paths.
pub mod template;

/// Default variables and precedence merging.
pub mod variables;
