// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for jsw-portal.
//!
//! A catalog maps language codes to dictionaries; a dictionary is a nested
//! tree of strings addressed by dotted paths. Both are loaded from site data
//! (see [`crate::loader`]), so lookups are total: every read names the
//! literal to use when the path is absent.
//!
//! ## Fallback order
//!
//! 1. The dictionary of the selected language
//! 2. The `en` dictionary, when the selected language has none at all
//! 3. An empty dictionary, so every key resolves to its literal fallback
//!
//! Fallback is per dictionary, not per key: a partial `zh-Hant` dictionary
//! does not borrow individual strings from `en`.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Nested string tree for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Value);

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary(Value::Object(Default::default()))
    }
}

impl Dictionary {
    pub fn new(tree: Value) -> Self {
        Dictionary(tree)
    }

    /// Shared empty dictionary, used when a catalog has nothing usable.
    pub fn empty() -> &'static Dictionary {
        static EMPTY: OnceLock<Dictionary> = OnceLock::new();
        EMPTY.get_or_init(Dictionary::default)
    }

    /// Descend the tree one dotted segment at a time.
    ///
    /// Returns `None` as soon as a segment is missing or the current node is
    /// not an object.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, segment| node.as_object()?.get(segment))
    }

    /// Resolve a dotted path to display text.
    ///
    /// Strings come back verbatim, numbers and booleans stringified. Absent
    /// paths, `null`, and non-leaf nodes (objects, arrays) yield `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsw_portal::i18n::Dictionary;
    /// let dict = Dictionary::new(serde_json::json!({"ui": {"open": "Go"}}));
    /// assert_eq!(dict.pick("ui.open", "Open"), "Go");
    /// assert_eq!(dict.pick("ui.search_label", "Search"), "Search");
    /// assert_eq!(dict.pick("ui.open.deeper", "x"), "x");
    /// ```
    pub fn pick(&self, path: &str, fallback: &str) -> String {
        self.text(path).unwrap_or_else(|| {
            log::debug!("dictionary key '{}' unresolved, using fallback", path);
            fallback.to_string()
        })
    }

    /// Like [`Dictionary::pick`] but without a fallback.
    pub fn text(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether `path` resolves to a leaf value.
    pub fn contains(&self, path: &str) -> bool {
        self.text(path).is_some()
    }
}

/// Language-keyed collection of dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    dictionaries: BTreeMap<String, Dictionary>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, dictionary: Dictionary) {
        self.dictionaries.insert(code.into(), dictionary);
    }

    /// Dictionary stored under exactly this language's code.
    pub fn get(&self, lang: Lang) -> Option<&Dictionary> {
        // A root that is not an object counts as absent.
        self.dictionaries
            .get(lang.code())
            .filter(|dict| dict.0.is_object())
    }

    /// Dictionary to render `lang` with, following the catalog fallback order.
    pub fn resolve(&self, lang: Lang) -> &Dictionary {
        if let Some(dict) = self.get(lang) {
            return dict;
        }
        if let Some(dict) = self.get(Lang::En) {
            log::debug!("no dictionary for {}, falling back to en", lang);
            return dict;
        }
        log::debug!("catalog has neither {} nor en, using empty dictionary", lang);
        Dictionary::empty()
    }

    /// Language codes present in the catalog, including unsupported ones.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Dictionary)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Dictionary)>>(iter: I) -> Self {
        Self {
            dictionaries: iter.into_iter().collect(),
        }
    }
}
