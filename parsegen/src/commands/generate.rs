use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use parsegen_codegen_typescript::OutputPaths;
use parsegen_schema::{Config, OutputConfig, Runtime};

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Target runtime (overrides parsegen.toml)
    #[arg(short, long)]
    pub runtime: Option<Runtime>,

    /// Attributes file path
    #[arg(long)]
    pub attributes: Option<PathBuf>,

    /// Class definitions file path
    #[arg(long)]
    pub classes: Option<PathBuf>,

    /// Interface declarations file path
    #[arg(long)]
    pub declarations: Option<PathBuf>,

    /// JSDoc typedefs file path
    #[arg(long)]
    pub jsdoc: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print translated class descriptors as JSON instead of generating
    #[arg(long)]
    pub dump_descriptors: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.source.load_config().unwrap_or_exit();
        let source = self.source.source(&config);
        let entries = source.load().unwrap_or_exit();
        let output = self.output_config(&config);

        let report = ops::generate(
            source.describe(),
            entries,
            self.source.overrides(&config),
            GenerateOptions {
                output_dir: &self.output_dir,
                outputs: OutputPaths::resolve(&output),
                runtime: output.runtime,
                dry_run: self.dry_run,
                dump_descriptors: self.dump_descriptors,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// The `[output]` table with command line paths laid over it.
    fn output_config(&self, config: &Config) -> OutputConfig {
        let mut output = config.output.clone();
        if let Some(runtime) = self.runtime {
            output.runtime = runtime;
        }
        let paths = [
            (&mut output.attributes, &self.attributes),
            (&mut output.classes, &self.classes),
            (&mut output.declarations, &self.declarations),
            (&mut output.jsdoc, &self.jsdoc),
        ];
        for (slot, flag) in paths {
            if flag.is_some() {
                slot.clone_from(flag);
            }
        }
        output
    }
}
