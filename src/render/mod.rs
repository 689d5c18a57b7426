// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page rendering module

pub mod escape;
pub mod html;
pub mod model;
pub mod output;

use crate::i18n::{Catalog, Lang};
use crate::types::SiteDescription;

pub use escape::escape_html;
pub use html::{render_document, render_sections};
pub use model::{is_external, CardView, MailLink, PageModel, SectionView};
pub use output::OutputFormat;

/// Resolve the page model for `lang`, following the catalog fallback order.
pub fn build_model(site: &SiteDescription, catalog: &Catalog, lang: Lang) -> PageModel {
    PageModel::build(site, catalog.resolve(lang), lang)
}

/// Render the complete HTML document for `lang`.
pub fn render_page(site: &SiteDescription, catalog: &Catalog, lang: Lang) -> String {
    render_document(&build_model(site, catalog, lang))
}

/// Detect the language from `preferences`, then render.
pub fn render_for_preferences<S: AsRef<str>>(
    site: &SiteDescription,
    catalog: &Catalog,
    preferences: &[S],
) -> String {
    render_page(site, catalog, Lang::detect(preferences))
}
