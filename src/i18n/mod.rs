// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for jsw-portal.
//!
//! ## Supported languages
//!
//! | Code    | Language              |
//! |---------|-----------------------|
//! | en      | English               |
//! | zh-Hans | Chinese (Simplified)  |
//! | zh-Hant | Chinese (Traditional) |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"meta.title"`, `"ui.open"`,
//! `"items.faq.desc"`. Unlike a compiled-in catalog, the strings here are
//! site data loaded at runtime, so every lookup carries its own literal
//! fallback. A missing key is normal and never an error.
//!
//! Language selection only special-cases Chinese script variants; every
//! other preference list lands on English.

mod catalog;
mod lang;
mod locale;

pub use catalog::{Catalog, Dictionary};
pub use lang::Lang;
pub use locale::{parse_accept_language, preferences_from_env, preferences_from_vars};
