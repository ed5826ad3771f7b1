//! Command-line flags. Display flags override the config file.

use crate::config::{Layout, MAX_ITEMS_PER_ROW, RuntimeConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "news-pulse", version, about = "Aggregate RSS feeds into a filterable news page")]
pub struct Cli {
    /// Path to a config.toml (feeds list), a local RSS/Atom XML file, or a feed URL
    #[arg(long)]
    pub feeds: Option<String>,

    /// Where to write the rendered page
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Render a single page and exit instead of showing the menu
    #[arg(long)]
    pub once: bool,

    /// Do not open the page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Only show stories whose title or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to show; repeat for several. "All" disables the filter
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Cards per row in the grid layout
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_ITEMS_PER_ROW as i64))]
    pub items_per_row: Option<u8>,

    /// Hide the sentiment label on cards
    #[arg(long)]
    pub hide_sentiment: bool,

    /// Use the dark stylesheet
    #[arg(long)]
    pub dark: bool,
}

impl Cli {
    pub fn apply(&self, cfg: &mut RuntimeConfig) {
        if let Some(out) = &self.out {
            cfg.output = out.clone();
        }
        let d = &mut cfg.display;
        if let Some(search) = &self.search {
            d.search = search.clone();
        }
        if !self.categories.is_empty() {
            d.categories = self.categories.clone();
        }
        if let Some(layout) = self.layout {
            d.layout = layout;
        }
        if let Some(n) = self.items_per_row {
            d.set_items_per_row(n);
        }
        if self.hide_sentiment {
            d.show_sentiment = false;
        }
        if self.dark {
            d.dark_mode = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, DisplayConfig};

    #[test]
    fn test_cli_defaults_leave_config_alone() {
        let cli = Cli::parse_from(["news-pulse"]);
        let mut cfg = config::parse("").unwrap();
        cli.apply(&mut cfg);
        assert_eq!(cfg.display, DisplayConfig::default());
        assert!(!cli.once);
    }

    #[test]
    fn test_cli_display_overrides() {
        let cli = Cli::parse_from([
            "news-pulse",
            "--once",
            "-s",
            "Mars",
            "-c",
            "Science",
            "-c",
            "World",
            "--layout",
            "full-width",
            "--items-per-row",
            "5",
            "--hide-sentiment",
            "--dark",
        ]);
        let mut cfg = config::parse("").unwrap();
        cli.apply(&mut cfg);
        assert!(cli.once);
        assert_eq!(cfg.display.search, "Mars");
        assert_eq!(cfg.display.categories, vec!["Science", "World"]);
        assert_eq!(cfg.display.layout, Layout::FullWidth);
        assert_eq!(cfg.display.items_per_row, 5);
        assert_eq!(cfg.display.columns(), 1);
        assert!(!cfg.display.show_sentiment);
        assert!(cfg.display.dark_mode);
    }

    #[test]
    fn test_cli_rejects_items_per_row_out_of_range() {
        assert!(Cli::try_parse_from(["news-pulse", "--items-per-row", "7"]).is_err());
        assert!(Cli::try_parse_from(["news-pulse", "--items-per-row", "0"]).is_err());
    }
}
