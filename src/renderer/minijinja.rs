use super::filters::*;
use crate::{
    constants::AUTO_ESCAPE_EXTENSIONS,
    error::{Error, Result},
    ext::PathExt,
    renderer::interface::TemplateRenderer,
    template::TemplateLibrary,
    variables::VariableMapping,
};
use minijinja::{AutoEscape, Environment, ErrorKind};
use std::path::{Path, PathBuf};

/// MiniJinja-based template rendering engine.
///
/// Each instance owns its environment and loads templates lazily from the
/// library root, so two renderers never share filters or cached templates.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Library root, kept for error messages
    template_dir: String,
}

/// Picks HTML escaping for markup targets. The decision is made on the
/// name the file will have once the template suffix is removed.
fn auto_escape_for(name: &str, template_suffix: &str) -> AutoEscape {
    let target = name.strip_suffix(template_suffix).unwrap_or(name);
    let is_markup = Path::new(target)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUTO_ESCAPE_EXTENSIONS.contains(&ext));
    if is_markup {
        AutoEscape::Html
    } else {
        AutoEscape::None
    }
}

/// Resolves a template name below `root`. Parts that are empty or `.` are
/// skipped, names with a `..` part never resolve. Hidden files and
/// directories are valid templates.
fn load_template(
    root: &Path,
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    let mut path = root.to_path_buf();
    for part in name.split('/') {
        match part {
            "" | "." => continue,
            ".." => return Ok(None),
            part => path.push(part),
        }
    }
    match std::fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template '{}'", path.display()),
        )
        .with_source(e)),
    }
}

impl MiniJinjaRenderer {
    /// Creates a renderer reading templates from `library`.
    pub fn new(library: &TemplateLibrary) -> Self {
        let mut env = Environment::new();
        let root: PathBuf = library.root().to_path_buf();
        env.set_loader(move |name| load_template(&root, name));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let template_suffix = library.suffix().to_string();
        env.set_auto_escape_callback(move |name| auto_escape_for(name, &template_suffix));

        env.add_filter("default", default_filter);
        env.add_filter("to_cpp_identifier", to_cpp_identifier);
        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);

        Self { env, template_dir: library.root().display().to_string() }
    }

    fn lookup_error(&self, name: &str, e: minijinja::Error) -> Error {
        if e.kind() == ErrorKind::TemplateNotFound {
            Error::TemplateNotFound {
                name: name.to_string(),
                template_dir: self.template_dir.clone(),
            }
        } else {
            Error::RenderError { name: name.to_string(), source: e }
        }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template_path: &Path, variables: &VariableMapping) -> Result<String> {
        let name = template_path.to_template_name()?;
        let tmpl = self.env.get_template(&name).map_err(|e| self.lookup_error(&name, e))?;
        tmpl.render(variables).map_err(|source| Error::RenderError { name, source })
    }
}
