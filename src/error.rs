//! Error type shared by the scanning engine.
//!
//! The binary wraps these in [`anyhow::Error`]; library code returns
//! [`Result<T>`] so callers can tell a bad configuration apart from a missing
//! manifest or an unreadable license file.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed configuration or record input, raised before any I/O.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// No `package.json` at the scanned root.
    #[error("no package.json found in {}", path.display())]
    NotFound { path: PathBuf },

    /// A matched license/readme file or a manifest could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest license value has a shape other than a string or `{type, url}`.
    #[error("invalid license declaration: {0}")]
    InvalidInput(String),

    #[error("failed to parse {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
