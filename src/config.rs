use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{render::DEFAULT_OUTPUT, utils::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = "paths.yml";

/// Sources reported on when the config does not list its own.
pub const SOURCES_OF_INTEREST: &[&str] = &["ERA5-Land", "EMDNA", "CaSR", "PCICBlend"];

/// The parts of `paths.yml` this tool reads.
///
/// The file is shared with the rest of the extraction workflow, so unknown
/// keys are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub extract: ExtractConfig,
    #[serde(default)]
    pub variables_by_source: ReportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExtractConfig {
    pub reconstruction: ReconstructionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReconstructionConfig {
    pub search_data_catalogs: SearchDataCatalogs,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchDataCatalogs {
    /// Catalog locations, in order. Globs (`*`, `?`) are allowed.
    pub data_catalogs: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_sources() -> Vec<String> {
    SOURCES_OF_INTEREST.iter().map(|s| s.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            sources: default_sources(),
        }
    }
}

impl Config {
    pub fn data_catalogs(&self) -> &[String] {
        &self.extract.reconstruction.search_data_catalogs.data_catalogs
    }

    /// Validate configuration values.
    ///
    /// Returns an error for empty catalog entries, invalid glob patterns,
    /// an empty source list or an empty output path.
    pub fn validate(&self) -> Result<()> {
        for location in self.data_catalogs() {
            if location.trim().is_empty() {
                bail!("Empty entry in 'data_catalogs'");
            }
            if is_glob_pattern(location) {
                Pattern::new(location).with_context(|| {
                    format!("Invalid glob pattern in 'data_catalogs': \"{}\"", location)
                })?;
            }
        }

        if self.variables_by_source.sources.is_empty() {
            bail!("'variables_by_source.sources' must list at least one source");
        }

        if self.variables_by_source.output.trim().is_empty() {
            bail!("'variables_by_source.output' must not be empty");
        }

        Ok(())
    }

    /// Resolve catalog locations against `base_dir`, expanding globs.
    ///
    /// Literal entries are kept even if they do not exist (reading them
    /// fails later). A glob that matches nothing is an error, since it would
    /// otherwise silently drop a whole catalog from the report.
    pub fn catalog_locations(&self, base_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut locations = Vec::new();

        for entry in self.data_catalogs() {
            if !is_glob_pattern(entry) {
                locations.push(base_dir.join(entry));
                continue;
            }

            // Only the entry is a pattern; the config directory is matched literally
            let pattern = if Path::new(entry).is_absolute() {
                entry.clone()
            } else {
                Path::new(&Pattern::escape(&base_dir.to_string_lossy()))
                    .join(entry)
                    .to_string_lossy()
                    .into_owned()
            };
            let mut matches = glob::glob(&pattern)
                .with_context(|| format!("Invalid glob pattern in 'data_catalogs': \"{}\"", entry))?
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("Failed to expand \"{}\"", entry))?;
            if matches.is_empty() {
                bail!("No catalog matches \"{}\"", entry);
            }
            matches.sort();
            locations.append(&mut matches);
        }

        Ok(locations)
    }

    /// Report path, relative entries resolved against `base_dir`.
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.variables_by_source.output)
    }
}

pub fn default_config_yaml() -> Result<String> {
    let mut config = Config::default();
    config
        .extract
        .reconstruction
        .search_data_catalogs
        .data_catalogs
        .push("catalogs/reconstruction.json".to_string());
    serde_yaml::to_string(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from.
    pub path: PathBuf,
}

impl ConfigLoadResult {
    /// Directory relative locations in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Find `paths.yml` upwards from `start_dir` and load it.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => bail!(
            "No {} found in {} or its parent directories.\n\
             Hint: Run `varmatrix init` to create one, or pass --config.",
            CONFIG_FILE_NAME,
            start_dir.display()
        ),
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
    })
}
