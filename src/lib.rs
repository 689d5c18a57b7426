// SPDX-License-Identifier: PMPL-1.0-or-later

//! jsw-portal: localized link-portal page renderer.
//!
//! Takes two immutable inputs, a site description and a language-keyed
//! dictionary catalog, and renders a static portal page: chrome (title, meta
//! tags, header, footer), sections of link cards, and an inline script that
//! filters cards as the visitor types.
//!
//! PIPELINE:
//! 1. **Detect**: reduce a locale preference list to `en`, `zh-Hans` or
//!    `zh-Hant` ([`i18n::Lang::detect`]).
//! 2. **Resolve**: look every string up by dotted path, falling back to
//!    literals ([`i18n::Dictionary::pick`]) into a [`render::PageModel`].
//! 3. **Write**: emit escaped HTML ([`render::render_document`]).
//! 4. **Filter**: show cards matching the search query ([`search`]).

pub mod build;
pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod loader;
pub mod render;
pub mod search;
pub mod types;
