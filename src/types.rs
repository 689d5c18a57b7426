// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for jsw-portal
//!
//! The site description is the structural input of a page: which sections
//! exist, which items they hold and where each item links to. All visible
//! text comes from the dictionary catalog (see [`crate::i18n`]), keyed by the
//! ids declared here.

use serde::{Deserialize, Serialize};

/// Site-wide identity shown in the page chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Short site name, used in the default page title
    pub short: String,
    /// Contact address for the footer mail link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SiteInfo {
    /// Configured contact address; an empty string counts as unset.
    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

/// One link target rendered as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered group of items rendered under one heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }
}

/// Complete site description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescription {
    pub site: SiteInfo,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl SiteDescription {
    /// All items across all sections, in page order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}
