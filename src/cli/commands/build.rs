use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::BuildCommand;
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::{
    catalog::{EsmCatalogReader, collect},
    config::{load_config, load_config_file},
    matrix::build_with_diagnostics,
    render::write_report,
};

/// Collect records from every configured catalog, build the matrix and
/// write the report.
///
/// Nothing is written unless every catalog was read successfully.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--output`, `--source`)
/// 2. `paths.yml`
/// 3. Built-in defaults
pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let verbose = args.common.verbose;

    let loaded = match &args.common.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            load_config(&cwd)?
        }
    };
    if verbose {
        eprintln!("Using config: {}", loaded.path.display());
    }

    let config = &loaded.config;
    let base_dir = loaded.base_dir();

    let sources: Vec<String> = if args.sources.is_empty() {
        config.variables_by_source.sources.clone()
    } else {
        args.sources.clone()
    };
    let locations = config.catalog_locations(base_dir)?;
    let output: PathBuf = match args.output {
        Some(path) => path,
        None => config.output_path(base_dir),
    };

    if verbose {
        eprintln!(
            "Reading {} catalog(s) for sources: {}",
            locations.len(),
            sources.join(", ")
        );
    }

    let collection = collect(&locations, &sources, &EsmCatalogReader::new())?;
    let outcome = build_with_diagnostics(&collection.records);

    write_report(&outcome.matrix, &output)?;

    Ok(CommandResult {
        summary: CommandSummary::Build(BuildSummary {
            matrix: outcome.matrix,
            output,
            catalogs: collection.stats,
            malformed: outcome.malformed,
        }),
    })
}
