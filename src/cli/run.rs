use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, build::build, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary
/// - `Err` if the command fails (config not found, unreadable catalog, report write error)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
