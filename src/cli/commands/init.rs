use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_yaml};

/// Write a starter `paths.yml` in the current directory.
///
/// An existing file is never overwritten; the command reports a failure
/// instead.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                path: config_path.to_path_buf(),
                created: false,
            }),
        });
    }

    fs::write(config_path, default_config_yaml()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path.to_path_buf(),
            created: true,
        }),
    })
}
