// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML document writer
//!
//! Element ids are a stable contract with stylesheets and the inline search
//! script: `skipLink`, `hTitle`, `hSub`, `searchLabel`, `search`, `content`,
//! `footNote`, `mailLink`.

use crate::render::escape::escape_html;
use crate::render::model::{CardView, PageModel, SectionView};
use crate::search::SEARCH_SCRIPT;
use std::fmt::Write;

/// Render a complete HTML5 document for `model`.
pub fn render_document(model: &PageModel) -> String {
    let title = escape_html(&model.title);
    let description = escape_html(&model.description);

    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(model.lang.code()));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", title);
    let _ = writeln!(html, "<meta name=\"description\" content=\"{}\">", description);
    let _ = writeln!(html, "<meta property=\"og:title\" content=\"{}\">", title);
    let _ = writeln!(
        html,
        "<meta property=\"og:description\" content=\"{}\">",
        description
    );
    let _ = writeln!(
        html,
        "<meta name=\"twitter:description\" content=\"{}\">",
        description
    );
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<a id=\"skipLink\" class=\"skip\" href=\"#content\">{}</a>",
        escape_html(&model.skip_to_content)
    );

    html.push_str("<header>\n");
    let _ = writeln!(html, "<h1 id=\"hTitle\">{}</h1>", escape_html(&model.home_title));
    let _ = writeln!(html, "<p id=\"hSub\">{}</p>", escape_html(&model.home_subtitle));
    let _ = writeln!(
        html,
        "<label id=\"searchLabel\" for=\"search\">{}</label>",
        escape_html(&model.search_label)
    );
    let _ = writeln!(
        html,
        "<input id=\"search\" type=\"search\" autocomplete=\"off\" placeholder=\"{}\">",
        escape_html(&model.search_placeholder)
    );
    html.push_str("</header>\n");

    let _ = writeln!(html, "<main id=\"content\">{}</main>", render_sections(model));

    html.push_str("<footer>\n");
    let _ = writeln!(html, "<p id=\"footNote\">{}</p>", escape_html(&model.footer_note));
    let _ = writeln!(
        html,
        "<a id=\"mailLink\" href=\"{}\">{}</a>",
        escape_html(&model.mail.href),
        escape_html(&model.mail.text)
    );
    html.push_str("</footer>\n");

    let _ = writeln!(html, "<script>\n{}\n</script>", SEARCH_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Markup of the main content container: every section with its cards.
pub fn render_sections(model: &PageModel) -> String {
    model.sections.iter().map(render_section).collect()
}

fn render_section(section: &SectionView) -> String {
    let title = escape_html(&section.title);
    let cards: String = section.cards.iter().map(render_card).collect();
    format!(
        "<section class=\"section\" aria-label=\"{title}\"><h2>{title}</h2><div class=\"cards\">{cards}</div></section>"
    )
}

fn render_card(card: &CardView) -> String {
    let title = escape_html(&card.title);
    let desc = escape_html(&card.desc);
    let link_attrs = if card.external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        concat!(
            "<article class=\"card\" data-title=\"{title}\" data-desc=\"{desc}\">",
            "<div class=\"left\">",
            "<div class=\"icon\" aria-hidden=\"true\">{icon}</div>",
            "<div><h3>{title}</h3><p>{desc}</p></div>",
            "</div>",
            "<a class=\"go\" href=\"{href}\"{link_attrs}>{open}</a>",
            "</article>"
        ),
        title = title,
        desc = desc,
        icon = escape_html(&card.icon),
        href = escape_html(&card.href),
        link_attrs = link_attrs,
        open = escape_html(&card.open_label),
    )
}
