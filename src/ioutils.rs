use std::path::Path;

use crate::error::{Error, Result};

fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::WriteError { path: path.display().to_string(), source }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| write_error(dest_path, e))
}

/// Writes `content` to `dest_path`, creating parent directories and
/// overwriting any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|e| write_error(dest_path, e))
}

/// Copies `source_path` byte for byte to `dest_path`, creating parent
/// directories and overwriting any existing file.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path)
        .map(|_| ())
        .map_err(|e| write_error(dest_path, e))
}

/// Sets `rwxr-xr-x` on the file.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| write_error(path, e))
}

/// Permission bits have no meaning here; scripts are left as written.
#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_path: P) -> Result<()> {
    Ok(())
}
