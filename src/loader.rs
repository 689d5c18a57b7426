// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading of site descriptions and dictionary catalogs
//!
//! Three input shapes are accepted, chosen by file extension:
//! - `.yaml` / `.yml`: YAML
//! - `.js`: a script assignment such as `window.__JSW_SITE__ = {...};`
//! - anything else: JSON

use crate::i18n::Catalog;
use crate::types::SiteDescription;
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Load the site description from `path`.
pub fn load_site(path: &Path) -> Result<SiteDescription> {
    let site: SiteDescription = load_document(path)?;
    log::debug!(
        "loaded site '{}' with {} sections from {}",
        site.site.short,
        site.sections.len(),
        path.display()
    );
    Ok(site)
}

/// Load the language-keyed dictionary catalog from `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = load_document(path)?;
    log::debug!(
        "loaded catalog with languages [{}] from {}",
        catalog.codes().collect::<Vec<_>>().join(", "),
        path.display()
    );
    Ok(catalog)
}

/// Read and parse any supported document shape into `T`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_text(path)?;
    parse_document(&raw, path)
}

fn parse_document<T: DeserializeOwned>(raw: &str, path: &Path) -> Result<T> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str::<T>(raw).with_context(|| format!("parsing {}", path.display()))
        }
        Some("js") | Some("mjs") => {
            let literal = assignment_literal(raw)
                .ok_or_else(|| anyhow!("no assignment found in {}", path.display()))?;
            serde_json::from_str::<T>(literal)
                .with_context(|| format!("parsing assigned value in {}", path.display()))
        }
        _ => serde_json::from_str::<T>(raw).with_context(|| format!("parsing {}", path.display())),
    }
}

/// Read a text file, tolerating a UTF-8 BOM and Windows-1252 content.
pub fn read_text(path: &Path) -> Result<String> {
    let raw_bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let bytes = raw_bytes.strip_prefix(UTF8_BOM).unwrap_or(&raw_bytes);

    // Try UTF-8 first, then Latin-1 fallback
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => {
            // Every byte maps to a Windows-1252 character, so this never fails.
            let (cow, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            log::warn!("{} is not UTF-8, decoded as Windows-1252", path.display());
            Ok(cow.into_owned())
        }
    }
}

/// Extract the value of a `target = value;` script assignment.
///
/// Takes everything after the first `=` up to an optional trailing `;`.
/// Leading `//` line comments are skipped.
fn assignment_literal(raw: &str) -> Option<&str> {
    let mut body = raw.trim_start();
    while let Some(comment) = body.strip_prefix("//") {
        body = comment
            .split_once('\n')
            .map(|(_, tail)| tail)
            .unwrap_or("")
            .trim_start();
    }
    let (_, value) = body.split_once('=')?;
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SITE_JSON: &str =
        r#"{"site":{"short":"JSW","email":"a@b.com"},"sections":[{"id":"tools","items":[{"id":"a","href":"/a"}]}]}"#;

    #[test]
    fn assignment_literal_strips_target_and_semicolon() {
        let raw = "// generated\nwindow.__JSW_SITE__ = {\"a\": 1};\n";
        assert_eq!(assignment_literal(raw), Some("{\"a\": 1}"));
    }

    #[test]
    fn assignment_literal_rejects_missing_value() {
        assert_eq!(assignment_literal("window.x = ;"), None);
        assert_eq!(assignment_literal("no assignment here"), None);
        assert_eq!(assignment_literal(""), None);
    }

    #[test]
    fn all_shapes_load_the_same_site() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("site.json");
        let js = dir.path().join("site.js");
        let yaml = dir.path().join("site.yaml");
        fs::write(&json, SITE_JSON).unwrap();
        fs::write(&js, format!("window.__JSW_SITE__ = {};\n", SITE_JSON)).unwrap();
        fs::write(
            &yaml,
            "site:\n  short: JSW\n  email: a@b.com\nsections:\n  - id: tools\n    items:\n      - id: a\n        href: /a\n",
        )
        .unwrap();

        let from_json = load_site(&json).unwrap();
        assert_eq!(load_site(&js).unwrap(), from_json);
        assert_eq!(load_site(&yaml).unwrap(), from_json);
    }

    #[test]
    fn bom_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(SITE_JSON.as_bytes());
        fs::write(&path, bytes).unwrap();
        assert_eq!(load_site(&path).unwrap().site.short, "JSW");
    }

    #[test]
    fn windows_1252_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("i18n.json");
        // "Café" with a Windows-1252 é (0xE9)
        let mut bytes = br#"{"en":{"ui":{"home_title":"Caf"#.to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(br#""}}}"#);
        fs::write(&path, bytes).unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(
            catalog.resolve(crate::i18n::Lang::En).pick("ui.home_title", ""),
            "Café"
        );
    }

    #[test]
    fn windows_1252_unassigned_bytes_still_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("odd.txt");
        // 0x81 and 0x8D have no printable Windows-1252 glyph
        fs::write(&path, [b'a', 0x81, 0x8D, 0xFF]).unwrap();
        assert_eq!(read_text(&path).unwrap(), "a\u{81}\u{8d}ÿ");
    }

    #[test]
    fn errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_site(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));

        let missing = dir.path().join("missing.json");
        assert!(load_catalog(&missing).is_err());
    }
}
