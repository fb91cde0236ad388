use clap::Args;
use eyre::Result;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.source.load_config().unwrap_or_exit();
        let source = self.source.source(&config);
        let entries = source.load().unwrap_or_exit();

        let report = ops::check(source.describe(), entries, self.source.overrides(&config));
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
