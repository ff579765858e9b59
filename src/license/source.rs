use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::license::identify::LicenseIdentifier;

/// Anything that can report which licenses it declares.
pub trait DeclaresLicenses {
    fn names(&self) -> Vec<String>;
}

/// A license or readme file found inside a package directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    text: String,
    identifier: Arc<LicenseIdentifier>,
}

impl FileSource {
    /// Create an unread source; its text stays empty until [`FileSource::read`].
    pub fn new(path: impl Into<PathBuf>, identifier: Arc<LicenseIdentifier>) -> Self {
        Self {
            path: path.into(),
            text: String::new(),
            identifier,
        }
    }

    /// Load the file contents. Invalid UTF-8 is replaced rather than rejected.
    pub async fn read(&mut self) -> Result<()> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        self.text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeclaresLicenses for FileSource {
    fn names(&self) -> Vec<String> {
        self.identifier.identify(&self.text)
    }
}

/// The accepted shapes of a manifest `license` / `licenses` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ManifestLicense {
    Label(String),
    Object {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        url: Option<String>,
    },
}

/// A license declared directly in `package.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSource {
    license: String,
    url: String,
}

impl ManifestSource {
    pub fn new(declared: ManifestLicense) -> Self {
        match declared {
            ManifestLicense::Label(license) => Self {
                license,
                url: "(none)".to_string(),
            },
            ManifestLicense::Object { kind, url } => Self {
                license: kind,
                url: url.unwrap_or_else(|| "(none)".to_string()),
            },
        }
    }

    /// Build from a raw JSON value, rejecting anything but a string or a
    /// `{type, url}` object.
    pub fn from_value(value: &Value) -> Result<Self> {
        ManifestLicense::deserialize(value)
            .map(Self::new)
            .map_err(|_| {
                Error::InvalidInput(format!(
                    "expected a string or an object with a `type` field, found `{value}`"
                ))
            })
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DeclaresLicenses for ManifestSource {
    fn names(&self) -> Vec<String> {
        vec![self.license.clone()]
    }
}

/// Collect every license declared by the `license` and `licenses` manifest
/// fields. Either field may hold a single entry or an array of entries.
pub fn manifest_sources(manifest: &Map<String, Value>) -> Result<Vec<ManifestSource>> {
    let mut sources = Vec::new();

    for field in ["license", "licenses"] {
        match manifest.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::Array(entries)) => {
                for entry in entries {
                    sources.push(ManifestSource::from_value(entry)?);
                }
            }
            Some(value) => sources.push(ManifestSource::from_value(value)?),
        }
    }

    Ok(sources)
}

/// One origin of license information for a package.
#[derive(Debug, Clone)]
pub enum LicenseSource {
    File(FileSource),
    Manifest(ManifestSource),
}

impl DeclaresLicenses for LicenseSource {
    fn names(&self) -> Vec<String> {
        match self {
            LicenseSource::File(file) => file.names(),
            LicenseSource::Manifest(manifest) => manifest.names(),
        }
    }
}

impl From<FileSource> for LicenseSource {
    fn from(source: FileSource) -> Self {
        LicenseSource::File(source)
    }
}

impl From<ManifestSource> for LicenseSource {
    fn from(source: ManifestSource) -> Self {
        LicenseSource::Manifest(source)
    }
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseSource::File(file) => write!(f, "{}", file.path().display()),
            LicenseSource::Manifest(m) if m.url() == "(none)" => write!(f, "{}", m.license()),
            LicenseSource::Manifest(m) => write!(f, "{} <{}>", m.license(), m.url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::identify::IdentifyOptions;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn identifier() -> Arc<LicenseIdentifier> {
        Arc::new(LicenseIdentifier::new(IdentifyOptions::default()).unwrap())
    }

    #[test]
    fn test_manifest_from_string() {
        let source = ManifestSource::from_value(&json!("MIT")).unwrap();
        assert_eq!(source.license(), "MIT");
        assert_eq!(source.url(), "(none)");
        assert_eq!(source.names(), vec!["MIT"]);
    }

    #[test]
    fn test_manifest_from_object() {
        let source =
            ManifestSource::from_value(&json!({"type": "MIT", "url": "http://opensource.org/licenses/MIT"}))
                .unwrap();
        assert_eq!(source.license(), "MIT");
        assert_eq!(source.url(), "http://opensource.org/licenses/MIT");

        let no_url = ManifestSource::from_value(&json!({"type": "ISC"})).unwrap();
        assert_eq!(no_url.url(), "(none)");
    }

    #[test]
    fn test_manifest_rejects_other_shapes() {
        for value in [json!(42), json!(true), json!({"url": "x"}), json!(null)] {
            let err = ManifestSource::from_value(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{value}");
        }
    }

    #[test]
    fn test_manifest_label_is_not_reinterpreted() {
        let source = ManifestSource::from_value(&json!("(MIT OR Apache-2.0)")).unwrap();
        assert_eq!(source.names(), vec!["(MIT OR Apache-2.0)"]);
    }

    #[test]
    fn test_manifest_sources_array_form() {
        let manifest = json!({"licenses": ["MIT", "GPLv2"]});
        let sources = manifest_sources(manifest.as_object().unwrap()).unwrap();
        let labels: Vec<_> = sources.iter().map(|s| s.license()).collect();
        assert_eq!(labels, vec!["MIT", "GPLv2"]);
    }

    #[test]
    fn test_manifest_sources_both_fields_and_absent() {
        let manifest = json!({
            "license": "ISC",
            "licenses": [{"type": "MIT", "url": "u"}]
        });
        assert_eq!(manifest_sources(manifest.as_object().unwrap()).unwrap().len(), 2);

        let empty = json!({"name": "x"});
        assert!(manifest_sources(empty.as_object().unwrap()).unwrap().is_empty());

        let bad = json!({"licenses": [1]});
        assert!(manifest_sources(bad.as_object().unwrap()).is_err());
    }

    #[tokio::test]
    async fn test_file_source_read_and_names() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "Released under the MIT license.\nSee also: BSD").unwrap();

        let mut source = FileSource::new(f.path(), identifier());
        assert!(source.names().is_empty());

        source.read().await.unwrap();
        assert_eq!(source.names(), vec!["BSD", "MIT"]);
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileSource::new(dir.path().join("LICENSE"), identifier());
        let err = source.read().await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_display() {
        let manifest: LicenseSource = ManifestSource::from_value(&json!("MIT")).unwrap().into();
        assert_eq!(manifest.to_string(), "MIT");
        let linked: LicenseSource =
            ManifestSource::from_value(&json!({"type": "MIT", "url": "http://x"})).unwrap().into();
        assert_eq!(linked.to_string(), "MIT <http://x>");
        let file: LicenseSource = FileSource::new("/a/LICENSE", identifier()).into();
        assert_eq!(file.to_string(), "/a/LICENSE");
    }
}
