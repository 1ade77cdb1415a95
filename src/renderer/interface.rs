use crate::error::Result;
use crate::variables::VariableMapping;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template stored at `template_path` with `variables`.
    ///
    /// # Arguments
    /// * `template_path` - Path of the template relative to the template library root
    /// * `variables` - Variables available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` - the path does not resolve to a template
    /// * `Error::RenderError` - any other failure while loading or rendering
    fn render(&self, template_path: &Path, variables: &VariableMapping) -> Result<String>;
}
