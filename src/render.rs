//! HTML rendering of a [`Page`] as a card grid.
//!
//! The output is one self-contained document: stylesheet inline, no scripts.
//! Titles arrive already escaped from the fetcher; every other record field is
//! escaped here.

use crate::config::{DisplayConfig, Layout};
use crate::news::{NewsRecord, Page};
use crate::util::sanitize::escape_html;
use chrono::{Datelike, Utc};
use std::fmt::Write;

const BASE_CSS: &str = r#"
body { font-family: 'Roboto', sans-serif; margin: 0; padding: 1rem 2rem; background: #FAFAFA; color: #222; }
.main-header { font-size: 3.5rem; font-weight: 700; text-align: center; margin-bottom: 2rem; text-shadow: 2px 2px 4px rgba(0,0,0,0.1); }
.feed-error { background: #FDECEA; color: #8A1C1C; border-radius: 8px; padding: 0.6rem 1rem; margin-bottom: 0.5rem; }
.filters { font-size: 0.9rem; margin-bottom: 1rem; }
.chip { display: inline-block; padding: 0.15rem 0.6rem; margin-right: 0.3rem; border-radius: 12px; background: #E0E0E0; }
.chip.selected { background: #1E88E5; color: #FFFFFF; }
.news-grid { display: grid; gap: 1.5rem; padding: 1rem; }
.news-card { background: #FFFFFF; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem; transition: transform 0.3s ease, box-shadow 0.3s ease; display: flex; flex-direction: column; }
.news-card:hover { transform: translateY(-5px); box-shadow: 0 6px 12px rgba(0,0,0,0.15); }
.news-title { font-size: 1.2rem; font-weight: 600; margin: 0 0 0.5rem 0; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; height: 3em; }
.news-description { font-size: 0.9rem; margin-bottom: 1rem; flex-grow: 1; display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; height: 4.5em; }
.news-meta { font-size: 0.8rem; margin-bottom: 0.5rem; color: #555; }
.news-image { width: 100%; height: 200px; object-fit: cover; border-radius: 10px; margin-bottom: 1rem; }
.read-more { padding: 0.4rem 0.8rem; border-radius: 20px; text-decoration: none; font-weight: 600; font-size: 0.8rem; display: inline-block; text-align: center; background: #1E88E5; color: #FFFFFF; }
.sentiment-positive { color: green; }
.sentiment-negative { color: red; }
.sentiment-neutral { color: gray; }
.empty { text-align: center; color: #777; }
footer { text-align: center; margin-top: 2rem; }
"#;

const DARK_CSS: &str = r#"
body { background-color: #1E1E1E; color: #FFFFFF; }
.news-card { background-color: #2D2D2D; }
.news-title { color: #FFFFFF; }
.news-description, .news-meta { color: #CCCCCC; }
.chip { background: #3A3A3A; }
"#;

/// Render a full HTML document for `page`.
///
/// `categories` is the option list of the category picker; the selected ones
/// are highlighted.
pub fn render_page(page: &Page, display: &DisplayConfig, categories: &[String]) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let now = Utc::now();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>NewsPulse</title>\n<style>");
    html.push_str(BASE_CSS);
    if display.dark_mode {
        html.push_str(DARK_CSS);
    }
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1 class=\"main-header\">NewsPulse</h1>\n");

    for warning in &page.warnings {
        let _ = writeln!(html, "<div class=\"feed-error\">{}</div>", escape_html(warning));
    }

    render_filters(&mut html, page, display, categories);

    if page.records.is_empty() {
        html.push_str("<p class=\"empty\">No stories match the current filters.</p>\n");
    } else {
        let _ = writeln!(
            html,
            "<div class=\"news-grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\">",
            display.columns()
        );
        for record in &page.records {
            render_card(&mut html, record, display.show_sentiment);
        }
        html.push_str("</div>\n");
    }

    let _ = writeln!(
        html,
        "<footer><p>&copy; {} NewsPulse. All rights reserved.</p><p class=\"news-meta\">Updated {}</p></footer>",
        now.year(),
        now.format("%b %d, %Y %H:%M UTC")
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn render_filters(html: &mut String, page: &Page, display: &DisplayConfig, categories: &[String]) {
    html.push_str("<div class=\"filters\">");
    for category in categories {
        let selected = display.categories.iter().any(|c| c == category);
        let class = if selected { "chip selected" } else { "chip" };
        let _ = write!(html, "<span class=\"{}\">{}</span>", class, escape_html(category));
    }
    let layout = match display.layout {
        Layout::Grid => format!("Grid, {} per row", display.columns()),
        Layout::FullWidth => "Full width".to_string(),
    };
    let _ = write!(
        html,
        "<p>Showing {} of {} stories &middot; {}",
        page.records.len(),
        page.total,
        layout
    );
    if !display.search.is_empty() {
        let _ = write!(html, " &middot; search: &quot;{}&quot;", escape_html(&display.search));
    }
    html.push_str("</p></div>\n");
}

fn render_card(html: &mut String, record: &NewsRecord, show_sentiment: bool) {
    html.push_str("<div class=\"news-card\">\n");
    let _ = writeln!(
        html,
        "<img src=\"{}\" alt=\"News image\" class=\"news-image\">",
        escape_html(&record.image_url)
    );
    let _ = writeln!(html, "<h2 class=\"news-title\">{}</h2>", record.title);
    let _ = writeln!(
        html,
        "<p class=\"news-description\">{}</p>",
        escape_html(&record.description)
    );
    let _ = writeln!(
        html,
        "<p class=\"news-meta\">{} | {} | {}</p>",
        escape_html(&record.source),
        escape_html(&record.category),
        record.published.format("%b %d, %Y")
    );
    if show_sentiment {
        let label = record.sentiment.label;
        let _ = writeln!(
            html,
            "<p class=\"sentiment-{}\">Sentiment: {}</p>",
            label.as_str().to_lowercase(),
            label
        );
    }
    let _ = writeln!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"read-more\">Read more</a>",
        escape_html(&record.link)
    );
    html.push_str("</div>\n");
}
