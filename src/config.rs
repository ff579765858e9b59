use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::license::identify::{IdentifyOptions, DEFAULT_TAKE};
use crate::license::corpus::DEFAULT_CANDIDATES;
use crate::walker::WalkOptions;

/// Root configuration structure, deserialized from `.license-ledger/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub identify: IdentifyConfig,
}

/// Which packages are walked and how the report is rendered.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Leave out development dependencies.
    pub production: Option<bool>,
    /// Maximum dependency depth; unbounded when absent.
    pub depth: Option<usize>,
    pub summary: Option<SummaryMode>,
    pub csv: Option<bool>,
    /// Extra `package.json` fields carried on every resolved package.
    pub extra_manifest_fields: Vec<String>,
}

/// License text matching settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentifyConfig {
    pub edit_distance: Option<bool>,
    pub edit_distance_take: Option<usize>,
    pub edit_distance_candidates: Option<Vec<String>>,
}

/// How much of the aggregate license summary the standard report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Off,
    #[default]
    Simple,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Standard,
    Csv,
}

/// Values given on the command line; `None` / `false` defer to the file.
#[derive(Debug, Clone, Default)]
pub struct ScanOverrides {
    pub production: bool,
    pub depth: Option<usize>,
    pub summary: Option<SummaryMode>,
    pub csv: bool,
    pub edit_distance: bool,
}

/// Fully validated options for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub directory: PathBuf,
    pub walk: WalkOptions,
    pub summary: SummaryMode,
    pub format: OutputFormat,
    pub identify: IdentifyOptions,
}

impl Config {
    /// Merge command-line overrides into the file configuration and
    /// validate the result. Runs before any scanning I/O.
    pub fn into_options(self, directory: &Path, overrides: ScanOverrides) -> Result<ScanOptions> {
        if !directory.is_dir() {
            return Err(Error::Validation(format!(
                "{} is not a directory",
                directory.display()
            )));
        }

        let candidates = self.identify.edit_distance_candidates.unwrap_or_else(|| {
            DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
        });
        let identify = IdentifyOptions {
            edit_distance: overrides.edit_distance || self.identify.edit_distance.unwrap_or(false),
            take: self.identify.edit_distance_take.unwrap_or(DEFAULT_TAKE),
            candidates,
        };
        if identify.take == 0 {
            return Err(Error::Validation("edit_distance_take must be greater than zero".into()));
        }
        if identify.candidates.is_empty() {
            return Err(Error::Validation(
                "edit_distance_candidates must not be empty".into(),
            ));
        }

        let format = if overrides.csv || self.scan.csv.unwrap_or(false) {
            OutputFormat::Csv
        } else {
            OutputFormat::Standard
        };

        Ok(ScanOptions {
            directory: directory.to_path_buf(),
            walk: WalkOptions {
                production_only: overrides.production || self.scan.production.unwrap_or(false),
                max_depth: overrides.depth.or(self.scan.depth),
                extra_manifest_fields: self.scan.extra_manifest_fields,
            },
            summary: overrides.summary.or(self.scan.summary).unwrap_or_default(),
            format,
            identify,
        })
    }
}

fn parse(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&content)
        .map_err(|e| Error::Validation(format!("{}: {}", path.display(), e.message())))
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<project_path>/.license-ledger/config.toml`
/// 3. `~/.config/license-ledger/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return parse(path);
    }

    let project_config = project_path.join(".license-ledger").join("config.toml");
    if project_config.exists() {
        return parse(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-ledger")
            .join("config.toml");
        if home_config.exists() {
            return parse(&home_config);
        }
    }

    Ok(Config::default())
}
