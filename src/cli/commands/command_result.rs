use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{
    catalog::CatalogStats,
    matrix::{MalformedRecord, PresenceMatrix},
};

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub matrix: PresenceMatrix,
    /// Where the report was written.
    pub output: PathBuf,
    /// One entry per catalog location, in config order.
    pub catalogs: Vec<CatalogStats>,
    /// Records left out of the matrix.
    pub malformed: Vec<MalformedRecord>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False if a config file already existed and was left alone.
    pub created: bool,
}

/// Result of running a varmatrix command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Build(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}
