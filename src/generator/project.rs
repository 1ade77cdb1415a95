use super::GeneratedFile;
use crate::category::ProjectCategory;
use crate::error::Result;
use crate::ioutils::{create_dir_all, write_file};
use crate::renderer::TemplateRenderer;
use crate::template::TemplateLibrary;
use crate::variables::VariableMapping;
use log::info;
use std::path::Path;

/// Renders the category specific templates into the output root.
pub struct ProjectFileGenerator<'a> {
    engine: &'a dyn TemplateRenderer,
    library: &'a TemplateLibrary,
    output_root: &'a Path,
}

impl<'a> ProjectFileGenerator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        library: &'a TemplateLibrary,
        output_root: &'a Path,
    ) -> Self {
        Self { engine, library, output_root }
    }

    /// Renders every template of `category` and writes it below the output
    /// root, overwriting existing files.
    ///
    /// The first failure aborts the run. Files written before it stay on
    /// disk.
    ///
    /// # Returns
    /// * `Result<Vec<GeneratedFile>>` - The written files in processing order
    pub fn generate(
        &self,
        category: ProjectCategory,
        variables: &VariableMapping,
    ) -> Result<Vec<GeneratedFile>> {
        create_dir_all(self.output_root)?;

        let templates = self.library.discover(category)?;
        let mut generated = Vec::with_capacity(templates.len());

        for template in templates {
            let content = self.engine.render(&template, variables)?;
            let target =
                self.output_root.join(self.library.derive_output_path(&template, category)?);
            write_file(&content, &target)?;

            let file = GeneratedFile::rendered(target, content);
            info!("{}", file.get_message());
            generated.push(file);
        }

        Ok(generated)
    }
}
