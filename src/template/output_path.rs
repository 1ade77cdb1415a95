use super::TemplateLibrary;
use crate::category::ProjectCategory;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

impl TemplateLibrary {
    /// Maps a discovered template path to its path relative to the output
    /// root: the leading category directory and the template suffix are
    /// removed, everything in between is kept.
    ///
    /// # Examples
    /// With category `console` and suffix `.template`:
    /// - `console/src/main.cpp.template` becomes `src/main.cpp`
    /// - `console/CMakeLists.txt.template` becomes `CMakeLists.txt`
    pub fn derive_output_path<T: AsRef<Path>>(
        &self,
        template_path: T,
        category: ProjectCategory,
    ) -> Result<PathBuf> {
        let template_path = template_path.as_ref();
        let relative =
            template_path.strip_prefix(category.dir_name()).map_err(|e| Error::ProcessError {
                source_path: template_path.display().to_string(),
                e: e.to_string(),
            })?;
        Ok(self.strip_suffix(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library(suffix: &str) -> (TempDir, TemplateLibrary) {
        let tmp = TempDir::new().unwrap();
        let library = TemplateLibrary::open(tmp.path(), suffix).unwrap();
        (tmp, library)
    }

    #[test]
    fn strips_category_and_suffix() {
        let (_tmp, library) = library(".tmpl");
        let derived = library
            .derive_output_path("console/src/main.cpp.tmpl", ProjectCategory::Console)
            .unwrap();
        assert_eq!(derived, PathBuf::from("src/main.cpp"));
    }

    #[test]
    fn keeps_nested_directories() {
        let (_tmp, library) = library(".template");
        let template = Path::new("library").join("include").join("detail").join("config.hpp.template");

        let derived = library.derive_output_path(&template, ProjectCategory::Library).unwrap();

        assert_eq!(derived, Path::new("include").join("detail").join("config.hpp"));
    }

    #[test]
    fn category_name_inside_path_is_kept() {
        let (_tmp, library) = library(".template");
        let derived = library
            .derive_output_path("library/docs/library.md.template", ProjectCategory::Library)
            .unwrap();
        assert_eq!(derived, PathBuf::from("docs/library.md"));
    }

    #[test]
    fn path_outside_category_is_rejected() {
        let (_tmp, library) = library(".template");
        let result =
            library.derive_output_path("console/src/main.cpp.template", ProjectCategory::Library);
        assert!(matches!(result, Err(Error::ProcessError { .. })));
    }
}
