//! Loading template variables from a JSON configuration file.

use crate::error::{Error, Result};
use crate::variables::VariableMapping;
use log::warn;
use serde_json::Value;
use std::path::Path;

/// Reads `config_file` as a JSON object of template variables.
///
/// # Errors
/// * `Error::ConfigMissing` - the file does not exist
/// * `Error::ConfigParseError` - the content is not valid JSON or not an object
/// * `Error::IoError` - any other read failure
pub fn load_variables<P: AsRef<Path>>(config_file: P) -> Result<VariableMapping> {
    let config_file = config_file.as_ref();
    let path = config_file.display().to_string();

    let buf = match std::fs::read(config_file) {
        Ok(buf) => buf,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ConfigMissing { path });
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice::<Value>(&buf) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::ConfigParseError {
            path,
            e: "top-level value must be a JSON object".to_string(),
        }),
        Err(e) => Err(Error::ConfigParseError { path, e: e.to_string() }),
    }
}

/// Like [`load_variables`], but a missing or malformed file degrades to an
/// empty mapping with a warning. Other failures are still returned.
pub fn load_variables_or_default<P: AsRef<Path>>(config_file: P) -> Result<VariableMapping> {
    match load_variables(config_file) {
        Ok(map) => Ok(map),
        Err(e @ Error::ConfigMissing { .. }) => {
            warn!("{e} Using defaults.");
            Ok(VariableMapping::new())
        }
        Err(e @ Error::ConfigParseError { .. }) => {
            warn!("{e}");
            Ok(VariableMapping::new())
        }
        Err(e) => Err(e),
    }
}
