// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static pre-rendering of every supported language
//!
//! Output layout:
//!
//! ```text
//! <out>/index.html            default language
//! <out>/en/index.html
//! <out>/zh-Hans/index.html
//! <out>/zh-Hant/index.html
//! <out>/manifest.json
//! ```

use crate::i18n::{Catalog, Lang};
use crate::render;
use crate::types::SiteDescription;
use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
const PAGE_FILE: &str = "index.html";

/// Configuration for a build run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory receiving the pages and manifest
    pub out_dir: PathBuf,
    /// Language of the root `index.html`; detected from `preferences` if unset
    pub default_lang: Option<Lang>,
    /// Locale preference list used for detection
    pub preferences: Vec<String>,
}

impl BuildOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            default_lang: None,
            preferences: Vec::new(),
        }
    }

    pub fn default_lang(&self) -> Lang {
        self.default_lang
            .unwrap_or_else(|| Lang::detect(&self.preferences))
    }
}

/// One written page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub lang: Lang,
    /// Path relative to the output directory, `/`-separated
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Build summary, also written as `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub generated_at: String,
    pub default_lang: Lang,
    pub pages: Vec<PageEntry>,
}

impl BuildReport {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Render every supported language and write the output tree.
pub fn build_site(
    site: &SiteDescription,
    catalog: &Catalog,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let default_lang = options.default_lang();

    let rendered: Vec<(Lang, String)> = Lang::all()
        .par_iter()
        .map(|&lang| (lang, render::render_page(site, catalog, lang)))
        .collect();

    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("creating {}", options.out_dir.display()))?;

    let mut pages = Vec::with_capacity(rendered.len() + 1);
    for (lang, html) in &rendered {
        let relative = format!("{}/{}", lang.code(), PAGE_FILE);
        pages.push(write_page(&options.out_dir, &relative, *lang, html)?);

        if *lang == default_lang {
            pages.push(write_page(&options.out_dir, PAGE_FILE, *lang, html)?);
        }
    }

    let report = BuildReport {
        generated_at: Utc::now().to_rfc3339(),
        default_lang,
        pages,
    };

    let manifest_path = options.out_dir.join(MANIFEST_FILE);
    let manifest = serde_json::to_string_pretty(&report)?;
    fs::write(&manifest_path, manifest)
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    log::info!("wrote {}", manifest_path.display());

    Ok(report)
}

fn write_page(out_dir: &Path, relative: &str, lang: Lang, html: &str) -> Result<PageEntry> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({})", path.display(), lang);

    Ok(PageEntry {
        lang,
        path: relative.to_string(),
        bytes: html.len(),
        sha256: sha256_hex(html.as_bytes()),
    })
}

/// Lowercase hex SHA-256 digest.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn default_language_prefers_explicit_choice() {
        let mut options = BuildOptions::new("out");
        options.preferences = vec!["zh-HK".to_string()];
        assert_eq!(options.default_lang(), Lang::ZhHant);

        options.default_lang = Some(Lang::ZhHans);
        assert_eq!(options.default_lang(), Lang::ZhHans);

        assert_eq!(BuildOptions::new("out").default_lang(), Lang::En);
    }
}
