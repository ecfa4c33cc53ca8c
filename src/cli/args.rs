//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Read the configured catalogs and write the presence report
//! - `init`: Create a starter `paths.yml`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }

    pub fn quiet(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.quiet,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to paths.yml (default: search upwards from the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Source to include (overrides config file)
    /// Can be specified multiple times: --source CaSR --source EMDNA
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Do not print the matrix to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the variable/frequency presence matrix and write the HTML report
    Build(BuildCommand),
    /// Initialize a new paths.yml configuration file
    Init,
}
