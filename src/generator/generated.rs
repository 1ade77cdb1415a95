use std::path::PathBuf;

/// How the content of a generated file came to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Production {
    /// The source was rendered; `content` is what was written.
    Rendered { content: String },
    /// Rendering failed and the source was copied byte for byte.
    CopiedVerbatim {
        source: PathBuf,
        /// Why the source could not be rendered.
        reason: String,
        /// Set when the failure was surfaced as a warning (scripts only).
        warning: Option<String>,
    },
}

/// A file written into the output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub target: PathBuf,
    pub production: Production,
}

impl GeneratedFile {
    pub fn rendered(target: PathBuf, content: String) -> Self {
        Self { target, production: Production::Rendered { content } }
    }

    /// Whether the file took the copy fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self.production, Production::CopiedVerbatim { .. })
    }

    /// The rendered text, `None` for verbatim copies.
    pub fn content(&self) -> Option<&str> {
        match &self.production {
            Production::Rendered { content } => Some(content),
            Production::CopiedVerbatim { .. } => None,
        }
    }

    /// Progress line for this file.
    pub fn get_message(&self) -> String {
        match &self.production {
            Production::Rendered { .. } => format!("Generated: {}", self.target.display()),
            Production::CopiedVerbatim { source, .. } => format!(
                "Copied '{}' to '{}' (fallback)",
                source.display(),
                self.target.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_file_exposes_content() {
        let file = GeneratedFile::rendered(PathBuf::from("out/src/main.cpp"), "int main() {}".into());
        assert!(!file.is_fallback());
        assert_eq!(file.content(), Some("int main() {}"));
        assert_eq!(file.get_message(), "Generated: out/src/main.cpp");
    }

    #[test]
    fn copied_file_is_a_fallback() {
        let file = GeneratedFile {
            target: PathBuf::from("out/cmake/Broken.cmake"),
            production: Production::CopiedVerbatim {
                source: PathBuf::from("templates/shared/cmake/Broken.cmake"),
                reason: "syntax error".into(),
                warning: None,
            },
        };
        assert!(file.is_fallback());
        assert_eq!(file.content(), None);
        assert_eq!(
            file.get_message(),
            "Copied 'templates/shared/cmake/Broken.cmake' to 'out/cmake/Broken.cmake' (fallback)"
        );
    }
}
