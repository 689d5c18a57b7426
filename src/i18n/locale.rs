// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sources of locale preference lists.
//!
//! A browser hands the page `navigator.languages`; outside the browser the
//! same ordered list is reconstructed from the POSIX locale environment or
//! from an HTTP `Accept-Language` header. Both feed [`Lang::detect`].
//!
//! [`Lang::detect`]: crate::i18n::Lang::detect

use std::env;

/// Environment variables consulted, highest priority first.
const LOCALE_VARS: &[&str] = &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Ordered locale preferences from the process environment.
pub fn preferences_from_env() -> Vec<String> {
    preferences_from_vars(|name| env::var(name).ok())
}

/// Ordered locale preferences from an arbitrary variable source.
///
/// `LANGUAGE` may hold a colon-separated list; the others hold one locale.
/// Encoding and modifier suffixes (`.UTF-8`, `@euro`) are dropped, and the
/// `C`/`POSIX` locales are ignored. Duplicates keep their first position.
pub fn preferences_from_vars<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut prefs: Vec<String> = Vec::new();
    for &name in LOCALE_VARS {
        let Some(value) = lookup(name) else {
            continue;
        };
        for entry in value.split(':') {
            let tag = strip_posix_suffix(entry.trim());
            if tag.is_empty() || tag == "C" || tag == "POSIX" {
                continue;
            }
            if !prefs.iter().any(|p| p == tag) {
                prefs.push(tag.to_string());
            }
        }
    }
    prefs
}

fn strip_posix_suffix(tag: &str) -> &str {
    let end = tag.find(['.', '@']).unwrap_or(tag.len());
    &tag[..end]
}

/// Parse an HTTP `Accept-Language` header into an ordered preference list.
///
/// Entries are ordered by descending quality; equal qualities keep header
/// order. `q=0` entries and the `*` wildcard are dropped; malformed or
/// non-finite quality values count as `1`.
///
/// # Examples
///
/// ```
/// use jsw_portal::i18n::parse_accept_language;
/// let prefs = parse_accept_language("fr;q=0.5, zh-TW, en;q=0.8");
/// assert_eq!(prefs, vec!["zh-TW", "en", "fr"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .next()
                .and_then(|q| q.trim().parse::<f32>().ok())
                .filter(|q| q.is_finite())
                .unwrap_or(1.0);
            if quality <= 0.0 {
                return None;
            }
            Some((tag.to_string(), quality))
        })
        .collect();

    // sort_by is stable, so ties keep header order
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn language_list_comes_first() {
        let prefs = preferences_from_vars(vars(&[
            ("LANGUAGE", "zh_TW:en_US"),
            ("LANG", "de_DE.UTF-8"),
        ]));
        assert_eq!(prefs, vec!["zh_TW", "en_US", "de_DE"]);
    }

    #[test]
    fn suffixes_and_c_locale_are_dropped() {
        let prefs = preferences_from_vars(vars(&[
            ("LC_ALL", "C"),
            ("LC_MESSAGES", "sr_RS@latin"),
            ("LANG", "POSIX"),
        ]));
        assert_eq!(prefs, vec!["sr_RS"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let prefs = preferences_from_vars(vars(&[
            ("LANGUAGE", "en_GB:en_GB"),
            ("LANG", "en_GB.UTF-8"),
        ]));
        assert_eq!(prefs, vec!["en_GB"]);
    }

    #[test]
    fn empty_environment_yields_empty_list() {
        assert!(preferences_from_vars(vars(&[])).is_empty());
    }

    #[test]
    fn accept_language_orders_by_quality() {
        let prefs = parse_accept_language("en;q=0.3, zh-HK;q=0.9, ja");
        assert_eq!(prefs, vec!["ja", "zh-HK", "en"]);
    }

    #[test]
    fn accept_language_drops_wildcard_and_zero() {
        let prefs = parse_accept_language("*, de;q=0, en-US");
        assert_eq!(prefs, vec!["en-US"]);
    }

    #[test]
    fn accept_language_tolerates_garbage() {
        assert!(parse_accept_language("").is_empty());
        assert_eq!(parse_accept_language(" , fr;q=abc"), vec!["fr"]);
    }

    #[test]
    fn accept_language_treats_non_finite_quality_as_one() {
        assert_eq!(
            parse_accept_language("de;q=0.5, fr;q=NaN, ja;q=inf"),
            vec!["fr", "ja", "de"]
        );

        let header: Vec<String> = (0..60)
            .map(|i| match i % 3 {
                0 => format!("x{};q=NaN", i),
                1 => format!("x{};q=0.{}", i, i % 10),
                _ => format!("x{}", i),
            })
            .collect();
        let prefs = parse_accept_language(&header.join(", "));
        assert!(prefs.len() <= 60);
        assert_eq!(prefs[0], "x0");
    }
}
