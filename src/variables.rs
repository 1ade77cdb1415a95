//! Variable sources and the precedence rules for merging them.

use crate::category::ProjectCategory;
use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Flat mapping of variable names to JSON values handed to the renderer.
pub type VariableMapping = Map<String, Value>;

/// Merges `sources` ordered from lowest to highest precedence.
///
/// Merging is shallow: a key defined by a later source replaces the earlier
/// value wholesale, nested objects included.
pub fn merge<'a, I>(sources: I) -> VariableMapping
where
    I: IntoIterator<Item = &'a VariableMapping>,
{
    let mut merged = Map::new();
    for source in sources {
        merged.extend(source.clone());
    }
    merged
}

/// Resolves the variables for one run: defaults, then the configuration
/// file, then the explicit overrides from the command line.
pub fn resolve(
    defaults: &VariableMapping,
    config: &VariableMapping,
    overrides: &VariableMapping,
) -> VariableMapping {
    merge([defaults, config, overrides])
}

#[derive(Debug, Serialize)]
struct OptionalLibraries {
    fmt: bool,
    spdlog: bool,
    catch2: bool,
    boost: bool,
    openssl: bool,
}

impl Default for OptionalLibraries {
    fn default() -> Self {
        Self { fmt: true, spdlog: true, catch2: true, boost: false, openssl: false }
    }
}

#[derive(Debug, Serialize)]
struct ProjectDefaults {
    project_name: String,
    project_version: String,
    project_description: String,
    project_author: String,
    project_type: String,
    cpp_standard: String,
    cmake_version: String,
    enable_sanitizers: bool,
    enable_warnings: bool,
    use_vcpkg: bool,
    optional_libraries: OptionalLibraries,
}

/// Builds the lowest-precedence layer: the shipped defaults for `category`
/// plus the project name.
pub fn default_variables(
    category: ProjectCategory,
    project_name: &str,
) -> Result<VariableMapping> {
    let defaults = ProjectDefaults {
        project_name: project_name.to_string(),
        project_version: "1.0.0".to_string(),
        project_description: format!("A modern C++20 {category} application"),
        project_author: "Developer".to_string(),
        project_type: category.to_string(),
        cpp_standard: "20".to_string(),
        cmake_version: "3.20".to_string(),
        enable_sanitizers: true,
        enable_warnings: true,
        use_vcpkg: true,
        optional_libraries: OptionalLibraries::default(),
    };

    match serde_json::to_value(defaults)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Builds the highest-precedence layer from the per-field command line
/// overrides. Fields that were not given contribute no key.
pub fn override_variables(
    author: Option<&str>,
    version: Option<&str>,
    description: Option<&str>,
) -> VariableMapping {
    [
        ("project_author", author),
        ("project_version", version),
        ("project_description", description),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key.to_string(), Value::from(v))))
    .collect()
}
