//! Report renderers for a finished walk.
//!
//! - [`standard`]: one tree per package plus an optional license summary.
//! - [`csv`]: one row per package, summary never included.

pub mod csv;
pub mod standard;

use anyhow::Result;

use crate::config::{OutputFormat, SummaryMode};
use crate::models::PackageRecord;

pub fn render(packages: &[PackageRecord], format: OutputFormat, summary: SummaryMode) -> Result<String> {
    match format {
        OutputFormat::Standard => standard::render(packages, summary),
        OutputFormat::Csv => csv::render(packages),
    }
}
