#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use news_pulse::news::{FeedDescriptor, NewsRecord};
use news_pulse::sentiment;
use std::fs;
use std::path::PathBuf;

pub struct Item<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub description: &'a str,
    pub pub_date: &'a str,
}

pub fn rss(items: &[Item]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
<channel>
<title>Fixture</title>
<link>https://example.com/</link>
<description>fixture feed</description>
"#,
    );
    for it in items {
        xml.push_str("<item>\n");
        if !it.title.is_empty() {
            xml.push_str(&format!("<title>{}</title>\n", it.title));
        }
        if !it.link.is_empty() {
            xml.push_str(&format!("<link>{}</link>\n", it.link));
        }
        xml.push_str(&format!("<description><![CDATA[{}]]></description>\n", it.description));
        if !it.pub_date.is_empty() {
            xml.push_str(&format!("<pubDate>{}</pubDate>\n", it.pub_date));
        }
        xml.push_str("</item>\n");
    }
    xml.push_str("</channel>\n</rss>\n");
    xml
}

/// `n` well-formed items, one hour apart, newest first, starting at `start_hour` on 2024-03-01.
pub fn dated_rss(prefix: &str, n: usize, start_hour: u32) -> String {
    let titles: Vec<String> = (0..n).map(|i| format!("{} story {}", prefix, i)).collect();
    let links: Vec<String> = (0..n)
        .map(|i| format!("https://example.com/{}/{}", prefix, i))
        .collect();
    let dates: Vec<String> = (0..n)
        .map(|i| {
            let dt = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
                + chrono::Duration::hours(start_hour as i64 - i as i64);
            dt.to_rfc2822()
        })
        .collect();
    let items: Vec<Item> = (0..n)
        .map(|i| Item {
            title: &titles[i],
            link: &links[i],
            description: "<p>Plain report</p>",
            pub_date: &dates[i],
        })
        .collect();
    rss(&items)
}

/// Write `contents` to a file in the temp dir unique to this process and `name`.
pub fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("news-pulse-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

pub fn local_feed(name: &str, category: &str, path: &PathBuf) -> FeedDescriptor {
    FeedDescriptor::new(name, path.to_string_lossy(), category)
}

pub fn at(ts: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(ts, 0).unwrap()
}

pub fn make_record(title: &str, description: &str, category: &str, ts: i64) -> NewsRecord {
    NewsRecord {
        title: title.to_string(),
        description: description.to_string(),
        link: format!("https://example.com/{}", ts),
        published: at(ts),
        source: "Fixture".to_string(),
        category: category.to_string(),
        image_url: "https://example.com/img.png".to_string(),
        sentiment: sentiment::analyze(title),
    }
}
