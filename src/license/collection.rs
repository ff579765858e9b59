use std::collections::BTreeSet;

use futures::future::try_join_all;

use crate::error::Result;
use crate::license::source::{DeclaresLicenses, FileSource, LicenseSource};

/// Deduplicating aggregate of the license sources found for one package in
/// one category (manifest, license files or readme files).
#[derive(Debug, Clone, Default)]
pub struct LicenseCollection {
    sources: Vec<LicenseSource>,
}

impl LicenseCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, source: impl Into<LicenseSource>) {
        self.sources.push(source.into());
    }

    /// Read every file concurrently, then append them in input order.
    ///
    /// The first failed read is returned and nothing is appended.
    pub async fn add_many(&mut self, sources: Vec<FileSource>) -> Result<()> {
        if sources.is_empty() {
            return Ok(());
        }

        let loaded = try_join_all(sources.into_iter().map(|mut source| async move {
            source.read().await?;
            Ok::<_, crate::error::Error>(source)
        }))
        .await?;

        self.sources.extend(loaded.into_iter().map(LicenseSource::File));
        Ok(())
    }

    /// Sorted, deduplicated license names across all sources.
    pub fn summary(&self) -> Vec<String> {
        self.sources
            .iter()
            .flat_map(|source| source.names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn sources(&self) -> &[LicenseSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
