use std::path::PathBuf;

use clap::Parser;

use crate::config::{ScanOverrides, SummaryMode};

#[derive(Parser, Debug)]
#[command(
    name = "license-ledger",
    about = "List the licenses declared across an installed Node dependency tree",
    version
)]
pub struct Cli {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Exclude development dependencies
    #[arg(short = 'd', long = "no-dev")]
    pub no_dev: bool,

    /// Package depth (reach); unbounded when omitted
    #[arg(short, long, value_name = "NUM")]
    pub reach: Option<usize>,

    /// Summary of all licenses (not shown in csv format)
    #[arg(short, long, value_name = "MODE", ignore_case = true)]
    pub summary: Option<SummaryArg>,

    /// Output in csv format
    #[arg(short, long)]
    pub csv: bool,

    /// Fall back to the closest reference license text when no signature matches
    #[arg(long)]
    pub edit_distance: bool,

    /// Config file [default: ./.license-ledger/config.toml, fallback ~/.config/license-ledger/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log every package as it is scanned
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SummaryArg {
    Off,
    Simple,
    Detail,
}

impl From<&SummaryArg> for SummaryMode {
    fn from(arg: &SummaryArg) -> Self {
        match arg {
            SummaryArg::Off => SummaryMode::Off,
            SummaryArg::Simple => SummaryMode::Simple,
            SummaryArg::Detail => SummaryMode::Detail,
        }
    }
}

impl Cli {
    pub fn overrides(&self) -> ScanOverrides {
        ScanOverrides {
            production: self.no_dev,
            depth: self.reach,
            summary: self.summary.as_ref().map(Into::into),
            csv: self.csv,
            edit_distance: self.edit_distance,
        }
    }
}
