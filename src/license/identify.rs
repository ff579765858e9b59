//! Signature-based license identification over raw text.
//!
//! Text containing @@LICENSE-LEDGER-IGNORE@@ is never identified, which keeps
//! this file out of its own scans.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::license::corpus;
use crate::license::edit_distance;

/// Token that opts a file out of scanning entirely.
pub const IGNORE_MARKER: &str = "@@LICENSE-LEDGER-IGNORE@@";

/// Default number of leading characters compared by the edit-distance fallback.
pub const DEFAULT_TAKE: usize = 500;

/// Tuning for [`LicenseIdentifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyOptions {
    /// Fall back to the closest reference text when no signature matches.
    pub edit_distance: bool,
    /// Prefix length compared by the fallback.
    pub take: usize,
    /// Reference identifiers considered by the fallback.
    pub candidates: Vec<String>,
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self {
            edit_distance: false,
            take: DEFAULT_TAKE,
            candidates: corpus::DEFAULT_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

struct Signature {
    name: &'static str,
    matchers: Vec<Regex>,
}

/// Identifies license families named in a piece of text.
pub struct LicenseIdentifier {
    signatures: Vec<Signature>,
    options: IdentifyOptions,
}

impl std::fmt::Debug for LicenseIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseIdentifier")
            .field("signatures", &self.signatures.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Wrap `token` so it only matches as a whole word bounded by start/end of
/// text, whitespace, a double quote or a parenthesis.
fn bounded(token: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!(r#"(?:^|\s|"|\(){token}(?:$|\s|"|\))"#))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| Error::Validation(format!("signature `{token}`: {e}")))
}

fn plain(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Validation(format!("signature `{pattern}`: {e}")))
}

fn signatures() -> Result<Vec<Signature>> {
    Ok(vec![
        Signature {
            name: "BSD",
            matchers: vec![bounded("BSD", false)?],
        },
        Signature {
            name: "GPL",
            matchers: vec![bounded("GPL", true)?, bounded(r"GPLv\d", false)?],
        },
        Signature {
            name: "Public Domain",
            matchers: vec![bounded(r"Public\sdomain", true)?],
        },
        Signature {
            name: "LGPL",
            matchers: vec![bounded("LGPL", false)?],
        },
        Signature {
            // Only whitespace bounds "MIT" so quoted product names don't count.
            name: "MIT",
            matchers: vec![plain(r"(?:^|\s)MIT(?:$|\s)")?, plain(r"(?:^|\s)\(MIT\)(?:$|\s)")?],
        },
        Signature {
            name: "Apache",
            matchers: vec![bounded(r"Apache\sLicen[cs]e", true)?],
        },
        Signature {
            name: "MPL",
            matchers: vec![bounded("MPL", false)?],
        },
        Signature {
            name: "WTFPL",
            matchers: vec![
                bounded("WTFPL", false)?,
                bounded(
                    r"DO\sWHAT\sTHE\sFUCK\sYOU\sWANT\sTO\sPUBLIC\sLICEN[CS]E",
                    true,
                )?,
            ],
        },
        Signature {
            name: "ISC",
            matchers: vec![bounded("ISC", false)?],
        },
        Signature {
            name: "Eclipse Public License",
            matchers: vec![
                bounded(r"Eclipse\sPublic\sLicen[cs]e", true)?,
                bounded("EPL", false)?,
                bounded(r"EPL-1\.0", false)?,
            ],
        },
    ])
}

impl LicenseIdentifier {
    /// Build an identifier, validating the edit-distance settings up front.
    pub fn new(options: IdentifyOptions) -> Result<Self> {
        if options.take == 0 {
            return Err(Error::Validation(
                "edit-distance prefix length must be greater than zero".into(),
            ));
        }
        if options.candidates.is_empty() {
            return Err(Error::Validation(
                "edit-distance candidate list must not be empty".into(),
            ));
        }
        if let Some(unknown) = options
            .candidates
            .iter()
            .find(|name| corpus::reference_text(name).is_none())
        {
            return Err(Error::Validation(format!(
                "edit-distance candidate `{unknown}` has no reference text"
            )));
        }

        Ok(Self {
            signatures: signatures()?,
            options,
        })
    }

    /// Return the sorted, distinct license names declared by `text`.
    pub fn identify(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() || text.contains(IGNORE_MARKER) {
            return Vec::new();
        }

        let mut found: Vec<String> = self
            .signatures
            .iter()
            .filter(|sig| sig.matchers.iter().any(|re| re.is_match(text)))
            .map(|sig| sig.name.to_string())
            .collect();

        if found.is_empty() && self.options.edit_distance {
            let candidates = self
                .options
                .candidates
                .iter()
                .filter_map(|name| corpus::reference_text(name).map(|t| (name.as_str(), t)));
            if let Some(best) = edit_distance::closest(text, candidates, self.options.take) {
                found.push(best.to_string());
            }
        }

        found.sort();
        found.dedup();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier() -> LicenseIdentifier {
        LicenseIdentifier::new(IdentifyOptions::default()).unwrap()
    }

    fn single(text: &str) -> Vec<String> {
        identifier().identify(text)
    }

    #[test]
    fn test_each_family_in_the_middle_and_at_the_start() {
        let cases = [
            ("GPL", "GPL"),
            ("GPLv2", "GPL"),
            ("GPLv9", "GPL"),
            ("LGPL", "LGPL"),
            ("MIT", "MIT"),
            ("(MIT)", "MIT"),
            ("MPL", "MPL"),
            ("ISC", "ISC"),
            ("BSD", "BSD"),
            ("EPL", "Eclipse Public License"),
            ("EPL-1.0", "Eclipse Public License"),
            ("WTFPL", "WTFPL"),
            ("Apache\nLicense", "Apache"),
            ("public domain", "Public Domain"),
        ];
        for (token, family) in cases {
            assert_eq!(single(&format!("blah {token} blah")), vec![family], "{token}");
            assert_eq!(single(&format!("{token} blah")), vec![family], "{token}");
        }
    }

    #[test]
    fn test_quoted_and_parenthesised_tokens() {
        assert_eq!(single(r#"licensed as "GPL""#), vec!["GPL"]);
        assert_eq!(single("(BSD)"), vec!["BSD"]);
    }

    #[test]
    fn test_wtfpl_long_form_any_case_and_spelling() {
        assert_eq!(
            single("dO WHAT the fUck you want tO PUBLIC licensE blah"),
            vec!["WTFPL"]
        );
        assert_eq!(
            single("blah DO WHAT THE FUCK YOU WANT TO PUBLIC LICENCE blah"),
            vec!["WTFPL"]
        );
    }

    #[test]
    fn test_substrings_do_not_match() {
        assert!(single("SUBMIT the ISCSI driver, BSDish EMPLOYEE").is_empty());
        // LGPL is not also reported as GPL.
        assert_eq!(single("LGPL"), vec!["LGPL"]);
    }

    #[test]
    fn test_case_sensitive_families() {
        assert!(single("mit isc bsd mpl").is_empty());
        assert_eq!(single("gpl"), vec!["GPL"]);
    }

    #[test]
    fn test_dual_license_sorted_regardless_of_order() {
        assert_eq!(single("blah MIT blah\n\ncats GPL cats"), vec!["GPL", "MIT"]);
        assert_eq!(single("cats GPL cats\n\nblah MIT blah"), vec!["GPL", "MIT"]);
    }

    #[test]
    fn test_family_contributes_once() {
        assert_eq!(single("EPL EPL-1.0 Eclipse Public License"), vec!["Eclipse Public License"]);
    }

    #[test]
    fn test_idempotent() {
        let id = identifier();
        let text = "Released under the MIT license or the Apache License 2.0";
        assert_eq!(id.identify(text), id.identify(text));
        assert_eq!(id.identify(text), vec!["Apache", "MIT"]);
    }

    #[test]
    fn test_ignore_marker_suppresses_everything() {
        let text = format!("MIT GPL BSD {IGNORE_MARKER}");
        assert!(single(&text).is_empty());
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(single("").is_empty());
        assert!(single("  \n\t ").is_empty());
    }

    #[test]
    fn test_edit_distance_fallback() {
        let id = LicenseIdentifier::new(IdentifyOptions {
            edit_distance: true,
            ..IdentifyOptions::default()
        })
        .unwrap();
        let text = corpus::reference_text("ISC").unwrap();
        // The reference text itself names no bounded token, so the fallback decides.
        assert_eq!(id.identify(text), vec!["ISC"]);
        assert!(id.identify("   ").is_empty());
    }

    #[test]
    fn test_edit_distance_not_used_when_a_signature_matches() {
        let id = LicenseIdentifier::new(IdentifyOptions {
            edit_distance: true,
            ..IdentifyOptions::default()
        })
        .unwrap();
        assert_eq!(id.identify("MIT"), vec!["MIT"]);
    }

    #[test]
    fn test_unknown_candidate_is_rejected() {
        let err = LicenseIdentifier::new(IdentifyOptions {
            edit_distance: true,
            candidates: vec!["MIT".into(), "Made-Up-1.0".into()],
            ..IdentifyOptions::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_empty_candidates_and_zero_take_rejected() {
        assert!(LicenseIdentifier::new(IdentifyOptions {
            candidates: Vec::new(),
            ..IdentifyOptions::default()
        })
        .is_err());
        assert!(LicenseIdentifier::new(IdentifyOptions {
            take: 0,
            ..IdentifyOptions::default()
        })
        .is_err());
    }
}
