// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card search
//!
//! A card stays visible while the query is empty or its title and
//! description together contain the query, ignoring case and surrounding
//! whitespace. The predicate exists twice: [`is_visible`] for Rust callers
//! and [`SEARCH_SCRIPT`] for the generated page. Both must agree.

use crate::render::CardView;

/// Client-side filter embedded in every generated document.
///
/// Reads the `data-title`/`data-desc` attributes written by the HTML writer
/// and toggles `hidden` on each card. One passive listener, no state beyond
/// the DOM.
pub const SEARCH_SCRIPT: &str = r#"(function () {
  var input = document.getElementById("search");
  if (!input) return;
  var cards = Array.prototype.slice.call(document.querySelectorAll("[data-title]"));
  var norm = function (s) { return String(s || "").toLowerCase().trim(); };
  var apply = function () {
    var needle = norm(input.value);
    for (var i = 0; i < cards.length; i++) {
      var c = cards[i];
      var hay = norm(c.getAttribute("data-title") + " " + c.getAttribute("data-desc"));
      c.hidden = !!needle && hay.indexOf(needle) === -1;
    }
  };
  input.addEventListener("input", apply, { passive: true });
})();"#;

/// Lowercase and trim.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Normalized text a query is matched against.
pub fn haystack(card: &CardView) -> String {
    normalize(&format!("{} {}", card.title, card.desc))
}

/// Whether `card` is shown while `query` is typed in the search box.
pub fn is_visible(query: &str, card: &CardView) -> bool {
    let needle = normalize(query);
    needle.is_empty() || haystack(card).contains(&needle)
}

/// Visibility of every card, in order.
pub fn filter<'a, I>(query: &str, cards: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a CardView>,
{
    let needle = normalize(query);
    cards
        .into_iter()
        .map(|card| needle.is_empty() || haystack(card).contains(&needle))
        .collect()
}

/// The cards left visible by `query`, in order.
pub fn visible<'a, I>(query: &str, cards: I) -> Vec<&'a CardView>
where
    I: IntoIterator<Item = &'a CardView>,
{
    cards
        .into_iter()
        .filter(|card| is_visible(query, card))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, desc: &str) -> CardView {
        CardView {
            id: title.to_lowercase(),
            title: title.to_string(),
            desc: desc.to_string(),
            icon: "↗".to_string(),
            href: "#".to_string(),
            open_label: "Open".to_string(),
            external: false,
        }
    }

    #[test]
    fn empty_query_shows_everything() {
        let cards = vec![card("Alpha", ""), card("Beta", "second")];
        assert_eq!(filter("", &cards), vec![true, true]);
        assert_eq!(filter("   ", &cards), vec![true, true]);
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let cards = vec![card("Status Page", "Uptime"), card("Docs", "Guides")];
        assert_eq!(filter("  STATUS ", &cards), vec![true, false]);
        assert_eq!(filter("guides", &cards), vec![false, true]);
    }

    #[test]
    fn title_and_description_are_joined_with_a_space() {
        let c = card("Mail", "Server");
        assert!(is_visible("mail server", &c));
        assert!(!is_visible("mailserver", &c));
    }

    #[test]
    fn html_significant_text_matches_unescaped() {
        let c = card("R&D <lab>", "");
        assert!(is_visible("r&d", &c));
        assert!(!is_visible("&amp;", &c));
    }

    #[test]
    fn filtering_is_idempotent() {
        let cards = vec![card("常见问题", "FAQ"), card("Docs", "")];
        let first = filter("faq", &cards);
        let second = filter("faq", &cards);
        assert_eq!(first, second);
        assert_eq!(visible("常见", &cards).len(), 1);
    }

    #[test]
    fn script_uses_the_same_attributes_as_the_writer() {
        assert!(SEARCH_SCRIPT.contains("data-title"));
        assert!(SEARCH_SCRIPT.contains("data-desc"));
        assert!(SEARCH_SCRIPT.contains("passive: true"));
        assert!(!SEARCH_SCRIPT.contains("</script"));
    }
}
