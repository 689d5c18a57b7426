// SPDX-License-Identifier: PMPL-1.0-or-later

//! Input checks for a site description and its catalog
//!
//! Rendering never fails on incomplete data, so gaps only show up as
//! fallback text on the page. `check` reports them ahead of time.

use crate::i18n::{Catalog, Lang};
use crate::types::SiteDescription;
use colored::*;
use serde::Serialize;
use std::collections::HashSet;

/// Chrome keys every dictionary is expected to define.
pub const CHROME_KEYS: &[&str] = &[
    "meta.title",
    "meta.description",
    "ui.skip_to_content",
    "ui.home_title",
    "ui.home_subtitle",
    "ui.search_label",
    "ui.search_placeholder",
    "ui.open",
    "footer.note",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    pub fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red().bold(),
        };
        println!("  [{}] {:22} {}", tag, self.label, self.detail);
    }
}

/// Every dictionary key the page will look up for `site`.
pub fn expected_keys(site: &SiteDescription) -> Vec<String> {
    let mut keys: Vec<String> = CHROME_KEYS.iter().map(|k| k.to_string()).collect();
    for section in &site.sections {
        keys.push(format!("sections.{}", section.id));
    }
    for item in site.items() {
        keys.push(format!("items.{}.title", item.id));
        keys.push(format!("items.{}.desc", item.id));
    }
    keys
}

/// Run all checks.
pub fn check(site: &SiteDescription, catalog: &Catalog) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    let keys = expected_keys(site);

    for &lang in Lang::all() {
        checks.push(check_language(catalog, lang, &keys));
    }
    for code in catalog.codes() {
        if Lang::from_code(code).is_none() {
            checks.push(Diagnostic::warning(
                format!("dictionary {}", code),
                "not a supported language, never selected".to_string(),
            ));
        }
    }

    checks.push(check_unique(
        "section ids",
        site.sections.iter().map(|s| s.id.as_str()),
    ));
    checks.push(check_unique("item ids", site.items().map(|i| i.id.as_str())));
    checks.push(check_hrefs(site));
    checks
}

pub fn has_errors(checks: &[Diagnostic]) -> bool {
    checks.iter().any(|entry| entry.level == Level::Error)
}

pub fn print_report(checks: &[Diagnostic]) {
    println!("{}", "PORTAL INPUT CHECK".bold().yellow());
    for entry in checks {
        entry.print();
    }
}

fn check_language(catalog: &Catalog, lang: Lang, keys: &[String]) -> Diagnostic {
    let label = format!("dictionary {}", lang);
    let Some(dict) = catalog.get(lang) else {
        let detail = if lang == Lang::En {
            "missing (all text falls back to built-in defaults)".to_string()
        } else {
            "missing (falls back to en)".to_string()
        };
        return Diagnostic::warning(label, detail);
    };

    let missing: Vec<&str> = keys
        .iter()
        .filter(|key| !dict.contains(key))
        .map(String::as_str)
        .collect();
    if missing.is_empty() {
        Diagnostic::ok(label, format!("{} keys present", keys.len()))
    } else {
        Diagnostic::warning(
            label,
            format!("{} of {} keys missing: {}", missing.len(), keys.len(), missing.join(", ")),
        )
    }
}

fn check_unique<'a>(label: &'static str, ids: impl Iterator<Item = &'a str>) -> Diagnostic {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for id in ids {
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    if duplicates.is_empty() {
        Diagnostic::ok(label, format!("{} unique", seen.len()))
    } else {
        Diagnostic::error(label, format!("duplicated: {}", duplicates.join(", ")))
    }
}

fn check_hrefs(site: &SiteDescription) -> Diagnostic {
    let empty: Vec<&str> = site
        .items()
        .filter(|item| item.href.trim().is_empty())
        .map(|item| item.id.as_str())
        .collect();
    if empty.is_empty() {
        Diagnostic::ok("item links", format!("{} links set", site.items().count()))
    } else {
        Diagnostic::error("item links", format!("empty href: {}", empty.join(", ")))
    }
}
