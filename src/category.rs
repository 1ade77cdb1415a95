use clap::ValueEnum;
use std::fmt::Display;

/// The kind of project being scaffolded. Each category owns a subdirectory
/// of the template library with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectCategory {
    /// A console application.
    Console,
    /// A reusable library.
    Library,
}

impl ProjectCategory {
    /// Name of the category's directory inside the template library.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ProjectCategory::Console => "console",
            ProjectCategory::Library => "library",
        }
    }
}

impl Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
