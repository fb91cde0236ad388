use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail};
use parsegen_core::{File, FileRules, WriteResult};
use parsegen_schema::{CONFIG_FILE_NAME, Config, Runtime};

#[derive(Args)]
pub struct InitCommand {
    /// Target runtime (prompts when omitted)
    #[arg(short, long)]
    pub runtime: Option<Runtime>,

    /// Directory to write parsegen.toml into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Self::prompt_runtime()?,
        };

        let path = self.output_dir.join(CONFIG_FILE_NAME);
        let file = File::new(&path, Config::starter(runtime)).with_rules(FileRules::create_once());
        if file.write()? == WriteResult::Skipped {
            bail!("{} already exists", path.display());
        }

        println!("Created {}", path.display());
        Ok(())
    }

    fn prompt_runtime() -> Result<Runtime> {
        let runtimes: Vec<&str> = Runtime::ALL.iter().map(Runtime::as_str).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a runtime")
            .items(&runtimes)
            .default(0)
            .interact()
            .wrap_err("Failed to get runtime selection")?;

        Ok(Runtime::ALL[selection])
    }
}
