use super::{GeneratedFile, Production};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::{copy_file, make_executable, write_file};
use crate::renderer::TemplateRenderer;
use crate::template::TemplateLibrary;
use crate::variables::VariableMapping;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Propagates the library's `shared` directory into the output root.
///
/// Every file is offered to the renderer first. Files that do not render
/// (plain CMake modules, binaries, broken templates) are copied verbatim.
pub struct SharedFileProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    library: &'a TemplateLibrary,
    output_root: &'a Path,
}

fn relative_to(path: &Path, base: &Path) -> Result<PathBuf> {
    path.strip_prefix(base).map(Path::to_path_buf).map_err(|e| Error::ProcessError {
        source_path: path.display().to_string(),
        e: e.to_string(),
    })
}

impl<'a> SharedFileProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        library: &'a TemplateLibrary,
        output_root: &'a Path,
    ) -> Self {
        Self { engine, library, output_root }
    }

    /// Processes every file under the shared directory.
    ///
    /// A missing shared directory yields no files. Only template lookup and
    /// rendering failures select the copy fallback; I/O failures abort.
    ///
    /// # Returns
    /// * `Result<Vec<GeneratedFile>>` - The written files, each tagged with how it was produced
    pub fn process(&self, variables: &VariableMapping) -> Result<Vec<GeneratedFile>> {
        let shared_root = self.library.shared_root();
        if !shared_root.is_dir() {
            debug!("No shared directory at '{}'", shared_root.display());
            return Ok(Vec::new());
        }

        let mut generated = Vec::new();
        for dir_entry in WalkDir::new(&shared_root).sort_by_file_name() {
            let dir_entry = dir_entry?;
            if !dir_entry.path().is_file() {
                continue;
            }
            let file = self.process_file(dir_entry.path(), &shared_root, variables)?;
            info!("{}", file.get_message());
            generated.push(file);
        }
        Ok(generated)
    }

    fn process_file(
        &self,
        source: &Path,
        shared_root: &Path,
        variables: &VariableMapping,
    ) -> Result<GeneratedFile> {
        let target =
            self.output_root.join(self.library.strip_suffix(relative_to(source, shared_root)?));
        let template_path = relative_to(source, self.library.root())?;

        let production = match self.engine.render(&template_path, variables) {
            Ok(content) => {
                write_file(&content, &target)?;
                Production::Rendered { content }
            }
            Err(e) if e.is_render_failure() => {
                let reason = e.to_string();
                let warning = target.is_script().then(|| {
                    format!(
                        "Failed to process shared script '{}' as template: {reason}. Copying directly.",
                        source.display()
                    )
                });
                match &warning {
                    Some(message) => warn!("{message}"),
                    None => debug!("'{}' is not a template: {reason}", source.display()),
                }
                copy_file(source, &target)?;
                Production::CopiedVerbatim { source: source.to_path_buf(), reason, warning }
            }
            Err(e) => return Err(e),
        };

        if target.is_script() {
            make_executable(&target)?;
        }

        Ok(GeneratedFile { target, production })
    }
}
