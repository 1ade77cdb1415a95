use crate::{
    cli::Args,
    config::load_variables_or_default,
    error::Result,
    generator::{GeneratedFile, ProjectFileGenerator, SharedFileProcessor},
    renderer::MiniJinjaRenderer,
    template::TemplateLibrary,
    variables::{default_variables, override_variables, resolve, VariableMapping},
};
use log::debug;

/// Main CLI runner that orchestrates the project generation workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow and returns every file
    /// written, project files first.
    pub fn run(self) -> Result<Vec<GeneratedFile>> {
        let library =
            TemplateLibrary::open(&self.args.templates_dir, &self.args.template_suffix)?;
        let engine = MiniJinjaRenderer::new(&library);

        let variables = self.collect_variables()?;

        println!(
            "Generating {} project '{}'...",
            self.args.category, self.args.project_name
        );
        println!("Output directory: {}", self.args.output_dir.display());
        debug!("Variables: {}", serde_json::to_string_pretty(&variables)?);

        let mut generated = ProjectFileGenerator::new(&engine, &library, &self.args.output_dir)
            .generate(self.args.category, &variables)?;

        if self.args.no_shared {
            debug!("Skipping shared files");
        } else {
            let shared = SharedFileProcessor::new(&engine, &library, &self.args.output_dir)
                .process(&variables)?;
            generated.extend(shared);
        }

        println!("Successfully generated {} files!", generated.len());
        Ok(generated)
    }

    /// Resolves defaults, the optional configuration file and the command
    /// line overrides into the variables used for rendering.
    fn collect_variables(&self) -> Result<VariableMapping> {
        let defaults = default_variables(self.args.category, &self.args.project_name)?;
        let config = match &self.args.config {
            Some(path) => load_variables_or_default(path)?,
            None => VariableMapping::new(),
        };
        let overrides = override_variables(
            self.args.author.as_deref(),
            self.args.project_version.as_deref(),
            self.args.description.as_deref(),
        );
        Ok(resolve(&defaults, &config, &overrides))
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Vec<GeneratedFile>> {
    let runner = Runner::new(args);
    runner.run()
}
