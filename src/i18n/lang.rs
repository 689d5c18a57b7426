// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported page languages and preference-list selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Languages a portal page can be rendered in.
///
/// Each variant maps to a BCP 47 tag that doubles as the key of its
/// dictionary in the catalog and as the `<html lang>` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Lang {
    #[default]
    En,
    ZhHans,
    ZhHant,
}

impl Lang {
    /// Catalog key and `lang` attribute value for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::ZhHans => "zh-Hans",
            Lang::ZhHant => "zh-Hant",
        }
    }

    /// Parse a supported language code.
    ///
    /// Case-insensitive, and accepts `_` in place of `-` so that
    /// `zh_hant` from a config file is understood.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Some(Lang::En),
            "zh-hans" => Some(Lang::ZhHans),
            "zh-hant" => Some(Lang::ZhHant),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::ZhHans, Lang::ZhHant]
    }

    /// Reduce an ordered list of locale preferences to one supported language.
    ///
    /// The first entry starting with `zh` decides between Traditional (any
    /// `hant`, `tw`, `hk` or `mo` marker in the tag) and Simplified. The
    /// first entry starting with `en` selects English. Entries matching
    /// neither rule are skipped; an exhausted list yields English.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsw_portal::i18n::Lang;
    /// assert_eq!(Lang::detect(&["fr-FR", "zh-TW"]), Lang::ZhHant);
    /// assert_eq!(Lang::detect(&["zh-CN", "en"]), Lang::ZhHans);
    /// assert_eq!(Lang::detect::<&str>(&[]), Lang::En);
    /// ```
    pub fn detect<S: AsRef<str>>(preferences: &[S]) -> Lang {
        for raw in preferences {
            let tag = raw.as_ref().to_lowercase();
            if tag.starts_with("zh") {
                let traditional = ["hant", "tw", "hk", "mo"]
                    .iter()
                    .any(|marker| tag.contains(marker));
                let lang = if traditional {
                    Lang::ZhHant
                } else {
                    Lang::ZhHans
                };
                log::debug!("language {} selected from preference {:?}", lang, raw.as_ref());
                return lang;
            }
            if tag.starts_with("en") {
                log::debug!("language en selected from preference {:?}", raw.as_ref());
                return Lang::En;
            }
        }
        log::debug!("no supported language in preferences, defaulting to en");
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| {
            anyhow::anyhow!(
                "unsupported language '{}' (expected one of: en, zh-Hans, zh-Hant)",
                s
            )
        })
    }
}

impl Serialize for Lang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Lang::from_code(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported language '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_markers_select_hant() {
        for tag in ["zh-TW", "zh-HK", "zh-MO", "zh-Hant", "zh-Hant-CN", "ZH-hk"] {
            assert_eq!(Lang::detect(&[tag]), Lang::ZhHant, "{}", tag);
        }
    }

    #[test]
    fn other_chinese_selects_hans() {
        for tag in ["zh", "zh-CN", "zh-SG", "zh-Hans"] {
            assert_eq!(Lang::detect(&[tag]), Lang::ZhHans, "{}", tag);
        }
    }

    #[test]
    fn first_matching_entry_wins() {
        assert_eq!(Lang::detect(&["en-US", "zh-TW"]), Lang::En);
        assert_eq!(Lang::detect(&["de", "zh-HK", "en"]), Lang::ZhHant);
        assert_eq!(Lang::detect(&["ja", "fr", "en-GB"]), Lang::En);
    }

    #[test]
    fn unmatched_lists_default_to_english() {
        assert_eq!(Lang::detect(&["de-DE", "ja"]), Lang::En);
        assert_eq!(Lang::detect::<String>(&[]), Lang::En);
        assert_eq!(Lang::detect(&[""]), Lang::En);
    }

    #[test]
    fn posix_locale_strings_are_understood() {
        assert_eq!(Lang::detect(&["zh_TW.UTF-8"]), Lang::ZhHant);
        assert_eq!(Lang::detect(&["zh_CN.UTF-8"]), Lang::ZhHans);
    }

    #[test]
    fn code_roundtrip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Lang::from_code("ZH_hant"), Some(Lang::ZhHant));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn serde_uses_code() {
        let json = serde_json::to_string(&Lang::ZhHans).unwrap();
        assert_eq!(json, "\"zh-Hans\"");
        let back: Lang = serde_json::from_str("\"zh-hant\"").unwrap();
        assert_eq!(back, Lang::ZhHant);
        assert!(serde_json::from_str::<Lang>("\"fr\"").is_err());
    }
}
