use std::path::Path;

use crate::constants::SCRIPT_EXTENSIONS;
use crate::error::{Error, Result};

/// Extension trait for Path with the conversions the generators need.
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use kiln::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Converts a relative path into the name a template is registered under
    /// in the renderer: components joined with `/` on every platform.
    ///
    /// # Examples
    /// ```
    /// use kiln::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("console").join("src").join("main.cpp.template");
    /// assert_eq!(path.to_template_name().unwrap(), "console/src/main.cpp.template");
    /// ```
    fn to_template_name(&self) -> Result<String>;

    /// Whether the file extension marks the path as a shell script.
    fn is_script(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_template_name(&self) -> Result<String> {
        Ok(self.to_str_checked()?.replace('\\', "/"))
    }

    fn is_script(&self) -> bool {
        self.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
    }
}
