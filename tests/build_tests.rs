// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the multi-language build

use jsw_portal::build::{self, BuildOptions, BuildReport};
use jsw_portal::config::PortalConfig;
use jsw_portal::diagnostics;
use jsw_portal::i18n::Lang;
use jsw_portal::loader;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_build_writes_every_language_and_manifest() {
    let dir = TempDir::new().unwrap();
    let site = loader::load_site(&demo("site.json")).unwrap();
    let catalog = loader::load_catalog(&demo("i18n.json")).unwrap();

    let mut options = BuildOptions::new(dir.path().join("public"));
    options.preferences = vec!["zh-TW".to_string()];

    let report = build::build_site(&site, &catalog, &options).expect("build should succeed");

    assert_eq!(report.default_lang, Lang::ZhHant);
    assert_eq!(report.pages.len(), Lang::all().len() + 1);

    for lang in Lang::all() {
        let page = options.out_dir.join(lang.code()).join("index.html");
        let html = fs::read_to_string(&page).unwrap();
        assert!(
            html.contains(&format!("<html lang=\"{}\">", lang.code())),
            "{} should declare its language",
            page.display()
        );
    }

    let index = fs::read_to_string(options.out_dir.join("index.html")).unwrap();
    let hant = fs::read_to_string(options.out_dir.join("zh-Hant/index.html")).unwrap();
    assert_eq!(index, hant);
}

#[test]
fn test_manifest_digests_match_written_files() {
    let dir = TempDir::new().unwrap();
    let site = loader::load_site(&demo("site.json")).unwrap();
    let catalog = loader::load_catalog(&demo("i18n.json")).unwrap();

    let mut options = BuildOptions::new(dir.path());
    options.default_lang = Some(Lang::ZhHans);
    let report = build::build_site(&site, &catalog, &options).unwrap();

    let manifest = BuildReport::load(&dir.path().join(build::MANIFEST_FILE)).unwrap();
    assert_eq!(manifest, report);
    assert!(chrono::DateTime::parse_from_rfc3339(&manifest.generated_at).is_ok());

    for page in &manifest.pages {
        let bytes = fs::read(dir.path().join(&page.path)).unwrap();
        assert_eq!(bytes.len(), page.bytes, "{}", page.path);
        assert_eq!(build::sha256_hex(&bytes), page.sha256, "{}", page.path);
    }

    let root = manifest
        .pages
        .iter()
        .find(|p| p.path == "index.html")
        .unwrap();
    assert_eq!(root.lang, Lang::ZhHans);
}

#[test]
fn test_demo_config_resolves_inputs() {
    let config = PortalConfig::load(&demo("portal.yaml")).unwrap();
    let site = loader::load_site(config.site.as_ref().unwrap()).unwrap();
    let catalog = loader::load_catalog(config.i18n.as_ref().unwrap()).unwrap();
    assert_eq!(site.site.short, "JSW");
    assert_eq!(Lang::detect(&config.prefer), Lang::En);

    // The demo zh-Hant dictionary is deliberately incomplete.
    let checks = diagnostics::check(&site, &catalog);
    assert!(!diagnostics::has_errors(&checks));
    let hant = checks
        .iter()
        .find(|c| c.label == "dictionary zh-Hant")
        .unwrap();
    assert_eq!(hant.level, diagnostics::Level::Warn);
    assert!(hant.detail.contains("items.rss.title"));
}
