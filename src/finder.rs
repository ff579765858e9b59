//! Case-insensitive file-name search that never descends into nested
//! dependency directories.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Directory names pruned from every search.
pub const IGNORED_DIRS: &[&str] = &["node_modules", "bower_components"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Dependency-manager and hidden directories below the search root.
fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || IGNORED_DIRS.contains(&name))
}

/// Regular files, or symlinks whose target is a regular file. Dangling links
/// are not files.
fn is_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_symlink() {
        return std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
    }
    entry.file_type().is_file()
}

/// Find files anywhere under `directory` whose name matches `pattern`.
///
/// Returns paths relative to `directory`, sorted. Ignored and hidden
/// directories are pruned while walking, so their contents are never
/// visited. Symlinked files are returned; symlinked directories are not
/// entered.
pub fn glob_ignoring_modules(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if pattern.trim().is_empty() {
        return Err(Error::Validation("glob pattern must not be empty".into()));
    }
    let matcher = Pattern::new(pattern)
        .map_err(|e| Error::Validation(format!("invalid glob pattern `{pattern}`: {e}")))?;

    let mut found = Vec::new();
    for entry in WalkDir::new(directory)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(directory).to_path_buf();
            Error::io(path, e.into())
        })?;
        if !is_file(&entry) {
            continue;
        }
        let name_matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches_with(name, MATCH_OPTIONS));
        if name_matches {
            let relative = entry
                .path()
                .strip_prefix(directory)
                .unwrap_or(entry.path())
                .to_path_buf();
            found.push(relative);
        }
    }

    found.sort();
    Ok(found)
}

/// Run several searches on the blocking pool and merge their results.
pub async fn find(directory: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let dir = directory.to_path_buf();
    let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        let mut all = Vec::new();
        for pattern in &patterns {
            all.extend(glob_ignoring_modules(&dir, pattern)?);
        }
        all.sort();
        all.dedup();
        Ok::<_, Error>(all)
    })
    .await
    .map_err(|e| Error::io(directory, std::io::Error::other(e)))?
}
