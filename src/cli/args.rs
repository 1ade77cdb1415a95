use crate::category::ProjectCategory;
use crate::constants::{verbosity, DEFAULT_TEMPLATES_DIR, DEFAULT_TEMPLATE_SUFFIX};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

const AFTER_HELP: &str = r#"Examples:
  kiln console MyProject
  kiln library MyLibrary --config project.json
  kiln console TestApp --output ./output --author "John Doe""#;

/// CLI arguments for kiln.
#[derive(Parser, Debug, Clone)]
#[command(author, about = "Generate C++20 projects from templates", after_help = AFTER_HELP)]
pub struct Args {
    /// Type of project to generate.
    #[arg(value_enum, value_name = "CATEGORY")]
    pub category: ProjectCategory,

    /// Name of the project.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Destination directory for generated files.
    #[arg(short, long = "output", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file with template variables.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template library directory.
    #[arg(long, default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// Suffix marking files that are rendered as templates.
    #[arg(long, default_value = DEFAULT_TEMPLATE_SUFFIX)]
    pub template_suffix: String,

    /// Do not copy shared files (CMake modules, scripts).
    #[arg(long)]
    pub no_shared: bool,

    /// Project author name.
    #[arg(long)]
    pub author: Option<String>,

    /// Project version.
    #[arg(long = "version")]
    pub project_version: Option<String>,

    /// Project description.
    #[arg(long)]
    pub description: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, exiting with usage on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level. Warnings are always shown.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
