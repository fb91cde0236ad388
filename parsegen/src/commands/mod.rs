mod check;
mod completions;
mod generate;
mod init;
mod source;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
pub(crate) use source::SourceArgs;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for parsegen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "parsegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a Parse Server schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration files from the schema
    Generate(GenerateCommand),

    /// Validate the schema and overrides without writing anything
    Check(CheckCommand),

    /// Write a starter parsegen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
