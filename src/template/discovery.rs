use super::TemplateLibrary;
use crate::category::ProjectCategory;
use crate::error::{Error, Result};
use log::debug;
use std::path::PathBuf;
use walkdir::WalkDir;

impl TemplateLibrary {
    /// Lists the template files of `category`, relative to the library root.
    ///
    /// Entries are walked in file name order so progress output is stable;
    /// nothing downstream relies on the order.
    ///
    /// # Errors
    /// * `Error::CategoryNotFound` - the category directory does not exist
    pub fn discover(&self, category: ProjectCategory) -> Result<Vec<PathBuf>> {
        let category_root = self.category_root(category);
        if !category_root.is_dir() {
            return Err(Error::CategoryNotFound {
                category: category.to_string(),
                template_dir: self.root().display().to_string(),
            });
        }

        let mut templates = Vec::new();
        for dir_entry in WalkDir::new(&category_root).sort_by_file_name() {
            let dir_entry = dir_entry?;
            // `path().is_file()` follows symlinks, so linked templates are kept
            if !dir_entry.path().is_file() || !self.is_template_file(dir_entry.path()) {
                continue;
            }
            let relative = dir_entry.path().strip_prefix(self.root()).map_err(|e| {
                Error::ProcessError {
                    source_path: dir_entry.path().display().to_string(),
                    e: e.to_string(),
                }
            })?;
            debug!("Discovered template: {}", relative.display());
            templates.push(relative.to_path_buf());
        }
        Ok(templates)
    }
}
