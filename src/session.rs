use crate::config::RuntimeConfig;
use crate::news::{self, Fetcher, Page};
use crate::open_url::{open_page, open_url};
use crate::render::render_page;
use crate::sentiment::SentimentLabel;
use crate::ui::{self, MenuChoice};
use crate::util::sanitize::{clean_html, sanitize_for_terminal};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const MAIN_MENU: &[&str] = &[
    "Refresh & open page",
    "Search",
    "Categories",
    "Layout",
    "Items per row",
    "Toggle sentiment",
    "Toggle dark mode",
    "List headlines",
    "Quit",
];

/// Run one render pass and write the page to `cfg.output`.
pub async fn render_to_file(fetcher: &Fetcher, cfg: &RuntimeConfig) -> Result<Page> {
    let page = news::render_pass(fetcher, &cfg.feeds, &cfg.display).await;
    let html = render_page(&page, &cfg.display, &news::categories(&cfg.feeds));
    write_page(&cfg.output, &html)?;
    info!(path = %cfg.output.display(), stories = page.records.len(), "page written");
    Ok(page)
}

pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write page: {}", path.display()))
}

/// Interactive loop: the menu edits the display settings, refresh re-fetches
/// everything and reopens the page.
pub async fn run(mut cfg: RuntimeConfig, fetcher: &Fetcher, open_browser: bool) -> Result<()> {
    let options = news::categories(&cfg.feeds);
    let mut last: Option<Page> = None;

    loop {
        let items = main_menu_labels(&cfg);
        let choice = match ui::prompt_menu(
            "NewsPulse (b/q = quit)",
            &items,
            Some(0),
            cfg.header.as_deref(),
        ) {
            Ok(choice) => choice,
            Err(err) => {
                eprintln!("{}", style(err).red());
                continue;
            }
        };
        match choice {
            MenuChoice::Back | MenuChoice::Quit | MenuChoice::Index(8) => break,
            MenuChoice::Index(0) => {
                println!("Fetching {} feeds...", cfg.feeds.len());
                let page = render_to_file(fetcher, &cfg).await?;
                for warning in &page.warnings {
                    eprintln!("{}", style(sanitize_for_terminal(warning)).yellow());
                }
                if open_browser {
                    if let Err(err) = open_page(&cfg.output) {
                        warn!(error = %err, "could not open page");
                        eprintln!("Page written to {}", cfg.output.display());
                    }
                }
                last = Some(page);
            }
            MenuChoice::Index(1) => cfg.display.search = ui::prompt_search(&cfg.display.search)?,
            MenuChoice::Index(2) => {
                cfg.display.categories = ui::prompt_categories(&options, &cfg.display.categories)?
            }
            MenuChoice::Index(3) => cfg.display.layout = ui::prompt_layout(cfg.display.layout)?,
            MenuChoice::Index(4) => {
                let n = ui::prompt_items_per_row(cfg.display.items_per_row)?;
                cfg.display.set_items_per_row(n);
            }
            MenuChoice::Index(5) => cfg.display.show_sentiment = !cfg.display.show_sentiment,
            MenuChoice::Index(6) => cfg.display.dark_mode = !cfg.display.dark_mode,
            MenuChoice::Index(7) => match &last {
                Some(page) => {
                    if headline_menu(page, cfg.header.as_deref())? == MenuChoice::Quit {
                        break;
                    }
                }
                None => {
                    println!("Nothing fetched yet, refresh first. Press Enter.");
                    let _ = console::Term::stdout().read_line();
                }
            },
            MenuChoice::Index(_) => {}
        }
    }
    Ok(())
}

fn main_menu_labels(cfg: &RuntimeConfig) -> Vec<String> {
    let d = &cfg.display;
    let on_off = |b: bool| if b { "on" } else { "off" };
    MAIN_MENU
        .iter()
        .enumerate()
        .map(|(i, label)| match i {
            1 if !d.search.is_empty() => format!("{} [{}]", label, sanitize_for_terminal(&d.search)),
            2 => format!("{} [{}]", label, d.categories.join(", ")),
            3 => format!("{} [{:?}]", label, d.layout),
            4 => format!("{} [{}]", label, d.columns()),
            5 => format!("{} [{}]", label, on_off(d.show_sentiment)),
            6 => format!("{} [{}]", label, on_off(d.dark_mode)),
            _ => label.to_string(),
        })
        .collect()
}

fn headline_menu(page: &Page, header: Option<&str>) -> Result<MenuChoice> {
    let labels: Vec<String> = page
        .records
        .iter()
        .map(|r| {
            let label = r.sentiment.label;
            let tag = match label {
                SentimentLabel::Positive => style(label.as_str()).green(),
                SentimentLabel::Negative => style(label.as_str()).red(),
                SentimentLabel::Neutral => style(label.as_str()).dim(),
            };
            format!(
                "[{}] {} ({})",
                tag,
                sanitize_for_terminal(&clean_html(&r.title)),
                sanitize_for_terminal(&r.source)
            )
        })
        .collect();
    loop {
        match ui::prompt_menu(
            "Headlines (b = back, q = quit). Select one to open it.",
            &labels,
            None,
            header,
        ) {
            Ok(MenuChoice::Index(i)) => {
                if let Some(record) = page.records.get(i) {
                    if let Err(err) = open_url(&record.link) {
                        warn!(link = %record.link, error = %err, "could not open story");
                    }
                }
            }
            Ok(choice) => return Ok(choice),
            Err(err) => eprintln!("{}", style(err).red()),
        }
    }
}
