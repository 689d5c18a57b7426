// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolved page model
//!
//! Every string a page shows is resolved here, once, from the site
//! description and the selected dictionary. The HTML writer and the search
//! predicate only read the finished model, so neither touches the dictionary.

use crate::i18n::{Dictionary, Lang};
use crate::types::{Item, Section, SiteDescription};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Icon shown on cards whose item declares none.
pub const DEFAULT_ICON: &str = "↗";

/// Mail link text when the site has no contact address.
pub const MAIL_FALLBACK_TEXT: &str = "mail";

/// Footer mail link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailLink {
    pub href: String,
    pub text: String,
}

impl MailLink {
    pub fn for_email(email: Option<&str>) -> Self {
        match email {
            Some(address) => Self {
                href: format!("mailto:{}", address),
                text: address.to_string(),
            },
            None => Self {
                href: "#".to_string(),
                text: MAIL_FALLBACK_TEXT.to_string(),
            },
        }
    }
}

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub icon: String,
    pub href: String,
    pub open_label: String,
    /// http(s) targets open in a new tab
    pub external: bool,
}

impl CardView {
    fn build(item: &Item, dict: &Dictionary, open_label: &str) -> Self {
        Self {
            id: item.id.clone(),
            title: dict.pick(&format!("items.{}.title", item.id), &item.id),
            desc: dict.pick(&format!("items.{}.desc", item.id), ""),
            icon: item
                .icon
                .as_deref()
                .filter(|icon| !icon.is_empty())
                .unwrap_or(DEFAULT_ICON)
                .to_string(),
            href: item.href.clone(),
            open_label: open_label.to_string(),
            external: is_external(&item.href),
        }
    }
}

/// One rendered section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub cards: Vec<CardView>,
}

impl SectionView {
    fn build(section: &Section, dict: &Dictionary, open_label: &str) -> Self {
        Self {
            id: section.id.clone(),
            title: dict.pick(&format!("sections.{}", section.id), &section.id),
            cards: section
                .items
                .iter()
                .map(|item| CardView::build(item, dict, open_label))
                .collect(),
        }
    }
}

/// Fully resolved page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModel {
    pub lang: Lang,
    pub title: String,
    pub description: String,
    pub skip_to_content: String,
    pub home_title: String,
    pub home_subtitle: String,
    pub search_label: String,
    pub search_placeholder: String,
    pub footer_note: String,
    pub mail: MailLink,
    pub sections: Vec<SectionView>,
}

impl PageModel {
    /// Resolve every string of the page for `lang` from `dict`.
    ///
    /// Total: absent keys take their literal fallbacks, so an empty
    /// dictionary still yields a complete page.
    pub fn build(site: &SiteDescription, dict: &Dictionary, lang: Lang) -> Self {
        let default_title = format!("{} Portal", site.site.short);
        let open_label = dict.pick("ui.open", "Open");

        Self {
            lang,
            title: dict.pick("meta.title", &default_title),
            description: dict.pick("meta.description", ""),
            skip_to_content: dict.pick("ui.skip_to_content", "Skip to content"),
            home_title: dict.pick("ui.home_title", "Portal"),
            home_subtitle: dict.pick("ui.home_subtitle", ""),
            search_label: dict.pick("ui.search_label", "Search"),
            search_placeholder: dict.pick("ui.search_placeholder", ""),
            footer_note: dict.pick("footer.note", ""),
            mail: MailLink::for_email(site.site.contact_email()),
            sections: site
                .sections
                .iter()
                .map(|section| SectionView::build(section, dict, &open_label))
                .collect(),
        }
    }

    /// All cards across all sections, in page order.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }
}

/// Whether an href uses the http or https scheme.
pub fn is_external(href: &str) -> bool {
    static EXTERNAL: OnceLock<Regex> = OnceLock::new();
    EXTERNAL
        .get_or_init(|| Regex::new(r"(?i)^https?://").expect("static regex"))
        .is_match(href)
}
