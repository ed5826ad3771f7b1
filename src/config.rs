use crate::news::FeedDescriptor;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const ALL_CATEGORIES: &str = "All";
pub const MAX_ITEMS_PER_ROW: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Grid,
    FullWidth,
}

/// Everything the display surface lets the user adjust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub search: String,
    pub categories: Vec<String>,
    pub layout: Layout,
    pub items_per_row: u8,
    pub show_sentiment: bool,
    pub dark_mode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            layout: Layout::Grid,
            items_per_row: 3,
            show_sentiment: true,
            dark_mode: false,
        }
    }
}

impl DisplayConfig {
    /// Cards per row actually laid out: the slider only applies to the grid.
    pub fn columns(&self) -> usize {
        match self.layout {
            Layout::Grid => self.items_per_row.clamp(1, MAX_ITEMS_PER_ROW) as usize,
            Layout::FullWidth => 1,
        }
    }

    pub fn set_items_per_row(&mut self, n: u8) {
        self.items_per_row = n.clamp(1, MAX_ITEMS_PER_ROW);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            timeout_secs: 20,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub feeds: Vec<FeedDescriptor>,
    pub header: Option<String>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub feeds: Vec<FeedDescriptor>,
    pub header: Option<String>,
    pub output: PathBuf,
    pub display: DisplayConfig,
    pub http: HttpConfig,
}

impl From<AppConfig> for RuntimeConfig {
    fn from(parsed: AppConfig) -> Self {
        let mut display = parsed.display;
        display.set_items_per_row(display.items_per_row);
        Self {
            feeds: if parsed.feeds.is_empty() {
                default_feeds()
            } else {
                parsed.feeds
            },
            header: parsed.header,
            output: parsed.output.unwrap_or_else(default_output_path),
            display,
            http: parsed.http,
        }
    }
}

impl RuntimeConfig {
    fn single_feed(feed: FeedDescriptor) -> Self {
        Self {
            feeds: vec![feed],
            ..RuntimeConfig::from(AppConfig::default())
        }
    }
}

pub fn load(feeds_override: Option<String>) -> Result<RuntimeConfig> {
    // If an override is provided, try to interpret it:
    if let Some(path_str) = feeds_override {
        let p = PathBuf::from(&path_str);
        if p.is_file() {
            // If it's a TOML, parse as config; otherwise treat as a single local feed
            if path_str.to_ascii_lowercase().ends_with(".toml") {
                return read_config(&p);
            }
            let name = p
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("local-feed")
                .to_string();
            return Ok(RuntimeConfig::single_feed(FeedDescriptor::new(
                name, path_str, "Custom",
            )));
        }
        // Not a file; if it's likely a URL, wrap as a single feed
        if path_str.starts_with("http://") || path_str.starts_with("https://") {
            return Ok(RuntimeConfig::single_feed(FeedDescriptor::new(
                "Custom", path_str, "Custom",
            )));
        }
        anyhow::bail!("--feeds {} is neither a file nor an http(s) URL", path_str);
    }

    // Otherwise, try default config path
    if let Some(path) = default_config_path() {
        if path.is_file() {
            return read_config(&path);
        }
    }

    Ok(AppConfig::default().into())
}

pub fn parse(txt: &str) -> Result<RuntimeConfig> {
    let parsed: AppConfig = toml::from_str(txt)?;
    Ok(parsed.into())
}

fn read_config(path: &Path) -> Result<RuntimeConfig> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse(&txt).with_context(|| format!("failed to parse toml: {}", path.display()))
}

/// The built-in source list.
pub fn default_feeds() -> Vec<FeedDescriptor> {
    [
        ("NASA", "https://www.nasa.gov/rss/dyn/breaking_news.rss", "Science"),
        ("Yahoo Finance", "https://finance.yahoo.com/news/rssindex", "Finance"),
        ("CoinDesk", "https://www.coindesk.com/arc/outboundfeeds/rss/", "Cryptocurrency"),
        (
            "Reuters: Technology",
            "https://www.reutersagency.com/feed/?taxonomy=best-topics&post_type=best",
            "Technology",
        ),
        ("HoopsHype", "https://hoopshype.com/feed", "Basketball"),
        ("USA Today", "https://giantswire.usatoday.com/feed", "American Football"),
        ("NYT World News", "https://rss.nytimes.com/services/xml/rss/nyt/World.xml", "World"),
        ("The Verge", "https://www.theverge.com/rss/index.xml", "Technology"),
    ]
    .into_iter()
    .map(|(name, url, category)| FeedDescriptor::new(name, url, category))
    .collect()
}

pub fn default_output_path() -> PathBuf {
    env::temp_dir().join("news-pulse.html")
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("news-pulse");
        p.push("config.toml");
        return Some(p);
    }
    if let Ok(home) = env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("news-pulse");
        p.push("config.toml");
        return Some(p);
    }
    None
}
