use news_pulse::config::{self, DisplayConfig, Layout, default_feeds};

#[test]
fn empty_file_uses_builtin_feeds_and_defaults() {
    let cfg = config::parse("").unwrap();
    assert_eq!(cfg.feeds, default_feeds());
    assert_eq!(cfg.feeds.len(), 8);
    assert_eq!(cfg.display, DisplayConfig::default());
    assert_eq!(cfg.display.categories, vec!["All"]);
    assert_eq!(cfg.display.columns(), 3);
    assert!(cfg.display.show_sentiment);
    assert!(!cfg.display.dark_mode);
    assert_eq!(cfg.http.timeout_secs, 20);
}

#[test]
fn feeds_and_display_are_read_from_toml() {
    let cfg = config::parse(
        r#"
header = "Morning briefing"
output = "/tmp/briefing.html"

[[feeds]]
name = "NASA"
url = "https://www.nasa.gov/rss/dyn/breaking_news.rss"
category = "Science"

[[feeds]]
name = "Blog"
url = "https://blog.example.com/atom.xml"

[display]
layout = "full-width"
items_per_row = 9
dark_mode = true
categories = ["Science"]

[http]
timeout_secs = 3
"#,
    )
    .unwrap();

    assert_eq!(cfg.header.as_deref(), Some("Morning briefing"));
    assert_eq!(cfg.output.to_str(), Some("/tmp/briefing.html"));
    assert_eq!(cfg.feeds.len(), 2);
    assert_eq!(cfg.feeds[1].category, "General");
    assert_eq!(cfg.display.layout, Layout::FullWidth);
    assert_eq!(cfg.display.items_per_row, 6);
    assert_eq!(cfg.display.columns(), 1);
    assert!(cfg.display.dark_mode);
    assert!(cfg.display.show_sentiment);
    assert_eq!(cfg.http.timeout_secs, 3);
    assert_eq!(cfg.http.connect_timeout_secs, 5);
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(config::parse("feeds = 12").is_err());
}

#[test]
fn url_override_becomes_single_custom_feed() {
    let cfg = config::load(Some("https://example.com/rss".to_string())).unwrap();
    assert_eq!(cfg.feeds.len(), 1);
    assert_eq!(cfg.feeds[0].name, "Custom");
    assert_eq!(cfg.feeds[0].category, "Custom");
}

#[test]
fn xml_file_override_becomes_single_local_feed() {
    let path = std::env::temp_dir().join(format!("news-pulse-{}-override.xml", std::process::id()));
    std::fs::write(&path, "<rss/>").unwrap();
    let cfg = config::load(Some(path.to_string_lossy().into_owned())).unwrap();
    assert_eq!(cfg.feeds.len(), 1);
    assert_eq!(cfg.feeds[0].name, format!("news-pulse-{}-override", std::process::id()));
}

#[test]
fn unusable_override_is_rejected() {
    assert!(config::load(Some("/no/such/config.toml".to_string())).is_err());
}
