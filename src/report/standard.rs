use std::collections::BTreeMap;

use anyhow::{bail, Result};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::config::SummaryMode;
use crate::models::PackageRecord;

/// Render one tree per package followed by the aggregate summary.
pub fn render(packages: &[PackageRecord], summary: SummaryMode) -> Result<String> {
    if packages.is_empty() {
        bail!("must have at least one package to report");
    }

    let mut output: Vec<String> = packages.iter().map(package_tree).collect();

    match summary {
        SummaryMode::Off => {}
        SummaryMode::Simple => output.push(simple_summary(packages)),
        SummaryMode::Detail => output.push(detail_summary(packages)),
    }

    Ok(output.join("\n"))
}

fn package_tree(package: &PackageRecord) -> String {
    let sources = &package.license_sources;
    let lines: Vec<String> = [
        ("package.json: ", sources.package.summary()),
        ("license files:", sources.license.summary()),
        ("readme files: ", sources.readme.summary()),
    ]
    .into_iter()
    .filter(|(_, names)| !names.is_empty())
    .map(|(label, names)| format!("{} {}", label, names.join(", ")))
    .collect();

    let mut out = format!(
        "{} [license(s): {}]\n",
        package.id.bold(),
        package.summary().join(", ")
    );
    for (i, line) in lines.iter().enumerate() {
        let branch = if i + 1 == lines.len() { "└──" } else { "├──" };
        out.push_str(&format!("{branch} {line}\n"));
    }
    out
}

fn simple_summary(packages: &[PackageRecord]) -> String {
    let mut all: Vec<String> = packages.iter().flat_map(PackageRecord::summary).collect();
    all.sort();
    all.dedup();
    format!("{} {}\n", "LICENSES:".bold(), all.join(", "))
}

fn detail_summary(packages: &[PackageRecord]) -> String {
    let mut by_license: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for package in packages {
        for license in package.summary() {
            by_license.entry(license).or_default().push(&package.id);
        }
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
            Cell::new("Packages").add_attribute(Attribute::Bold),
        ]);

    for (license, ids) in &by_license {
        table.add_row(vec![
            Cell::new(license),
            Cell::new(ids.len()).set_alignment(CellAlignment::Right),
            Cell::new(ids.join("\n")),
        ]);
    }

    format!("{} {}\n{}\n", "LICENSES:".bold(), by_license.len(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::source::ManifestSource;
    use crate::models::PackageInfo;
    use serde_json::json;

    fn record(name: &str, licenses: &[&str]) -> PackageRecord {
        let mut record = PackageRecord::new(PackageInfo {
            id: format!("{name}@1.0.0"),
            name: name.to_string(),
            version: Some("1.0.0".into()),
            directory: "/tmp".into(),
            ..PackageInfo::default()
        })
        .unwrap();
        for license in licenses {
            record
                .license_sources
                .package
                .add(ManifestSource::from_value(&json!(license)).unwrap());
        }
        record
    }

    #[test]
    fn test_empty_is_an_error() {
        assert!(render(&[], SummaryMode::Simple).is_err());
    }

    #[test]
    fn test_package_tree_and_simple_summary() {
        colored::control::set_override(false);
        let packages = vec![record("a", &["MIT"]), record("b", &[])];
        let out = render(&packages, SummaryMode::Simple).unwrap();
        assert!(out.contains("a@1.0.0 [license(s): MIT]\n└── package.json:  MIT\n"));
        assert!(out.contains("b@1.0.0 [license(s): Unknown]\n"));
        assert!(out.ends_with("LICENSES: MIT, Unknown\n"));
    }

    #[test]
    fn test_branches() {
        colored::control::set_override(false);
        let mut pkg = record("a", &["MIT"]);
        pkg.license_sources
            .readme
            .add(ManifestSource::from_value(&json!("BSD")).unwrap());
        let out = package_tree(&pkg);
        assert_eq!(
            out,
            "a@1.0.0 [license(s): BSD, MIT]\n├── package.json:  MIT\n└── readme files:  BSD\n"
        );
    }

    #[test]
    fn test_summary_off() {
        colored::control::set_override(false);
        let out = render(&[record("a", &["MIT"])], SummaryMode::Off).unwrap();
        assert!(!out.contains("LICENSES"));
    }

    #[test]
    fn test_detail_summary_lists_packages() {
        colored::control::set_override(false);
        let packages = vec![record("a", &["MIT"]), record("b", &["MIT", "ISC"])];
        let out = render(&packages, SummaryMode::Detail).unwrap();
        assert!(out.contains("LICENSES: 2"));
        assert!(out.contains("ISC"));
        assert!(out.contains("b@1.0.0"));
    }
}
