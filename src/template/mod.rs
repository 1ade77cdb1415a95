//! The on-disk template library.
//!
//! A library root holds one directory per project category plus a `shared`
//! directory. Files whose name ends with the template suffix are rendered;
//! the suffix is dropped from the generated file name.
//!
//! - `discovery`: finds the templates of a category
//! - `output_path`: maps a template path to where it is written

pub mod discovery;
pub mod output_path;

use crate::category::ProjectCategory;
use crate::constants::SHARED_DIR;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    root: PathBuf,
    suffix: String,
}

impl TemplateLibrary {
    /// Opens the library at `root`, using `suffix` to recognise templates.
    ///
    /// # Errors
    /// * `Error::TemplateLibraryNotFound` - `root` is not a directory
    /// * `Error::InvalidTemplateSuffix` - `suffix` is not `.` followed by at least one character
    pub fn open<P: Into<PathBuf>>(root: P, suffix: &str) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::TemplateLibraryNotFound {
                template_dir: root.display().to_string(),
            });
        }
        if !suffix.starts_with('.') || suffix.len() < 2 {
            return Err(Error::InvalidTemplateSuffix { suffix: suffix.to_string() });
        }
        Ok(Self { root, suffix: suffix.to_string() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn category_root(&self, category: ProjectCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }

    pub fn shared_root(&self) -> PathBuf {
        self.root.join(SHARED_DIR)
    }

    /// Whether the file name carries the template suffix. A file named just
    /// the suffix is not a template.
    pub fn is_template_file<T: AsRef<Path>>(&self, path: T) -> bool {
        path.as_ref()
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.len() > self.suffix.len() && name.ends_with(&self.suffix))
    }

    /// Removes the template suffix from the file name, if present.
    pub fn strip_suffix<T: AsRef<Path>>(&self, path: T) -> PathBuf {
        let path = path.as_ref();
        if !self.is_template_file(path) {
            return path.to_path_buf();
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => path.with_file_name(&name[..name.len() - self.suffix.len()]),
            None => path.to_path_buf(),
        }
    }
}
