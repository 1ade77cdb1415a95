use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to build variables. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to walk the template library. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    /// The configuration file passed with `--config` does not exist.
    #[error("Configuration file '{path}' not found.")]
    ConfigMissing { path: String },

    /// The configuration file is not a JSON object.
    #[error("Invalid JSON in '{path}': {e}")]
    ConfigParseError { path: String, e: String },

    #[error("Cannot proceed: templates directory '{template_dir}' does not exist.")]
    TemplateLibraryNotFound { template_dir: String },

    #[error("Invalid template suffix '{suffix}': it must start with '.' and have at least 1 character after it.")]
    InvalidTemplateSuffix { suffix: String },

    #[error("Project type '{category}' not found in '{template_dir}'.")]
    CategoryNotFound { category: String, template_dir: String },

    #[error("Template '{name}' not found in '{template_dir}'.")]
    TemplateNotFound { name: String, template_dir: String },

    #[error("Error processing template '{name}': {source}")]
    RenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to write '{path}'. Original error: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Whether the error came from looking up or rendering a template, as
    /// opposed to touching the file system.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Error::TemplateNotFound { .. } | Error::RenderError { .. })
    }
}

/// Convenience type alias for Results with kiln's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
