use anyhow::{bail, Result};

use crate::models::PackageRecord;

const HEADER: [&str; 8] = [
    "name",
    "version",
    "directory",
    "repository",
    "summary",
    "from package.json",
    "from license",
    "from readme",
];

/// One header line plus one row per package. Multi-valued cells are joined
/// with `;`.
pub fn render(packages: &[PackageRecord]) -> Result<String> {
    if packages.is_empty() {
        bail!("must have at least one package to report");
    }

    let mut out = HEADER.join(",");
    out.push('\n');

    for package in packages {
        let sources = &package.license_sources;
        let row = [
            package.name.clone(),
            package.version.clone(),
            package.directory.display().to_string(),
            package.repository.clone(),
            package.summary().join(";"),
            sources.package.summary().join(";"),
            sources.license.summary().join(";"),
            sources.readme.summary().join(";"),
        ];
        let cells: Vec<String> = row.iter().map(|cell| escape(cell)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    Ok(out)
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
