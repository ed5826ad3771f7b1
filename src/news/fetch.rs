use super::image::resolve_image;
use super::model::{FeedDescriptor, FeedOutcome, NewsRecord};
use crate::config::HttpConfig;
use crate::error::FetchError;
use crate::sentiment;
use crate::util::date::parse_date;
use crate::util::sanitize::{clean_html, escape_html, truncate_description};
use chrono::Utc;
use feed_rs::model::Entry;
use feed_rs::parser;
use futures_util::StreamExt;
use reqwest::Client;
use std::{fs, path::Path};
use tracing::{debug, info, warn};
use url::Url;

/// Entries kept per feed; the rest are dropped.
pub const MAX_ENTRIES_PER_FEED: usize = 10;

// 5 MB cap
const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(http: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("news-pulse/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .connect_timeout(http.connect_timeout())
            .timeout(http.timeout())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one feed. Failures never escape: the feed then contributes no
    /// records and a warning naming it.
    pub async fn fetch(&self, feed: &FeedDescriptor) -> FeedOutcome {
        match self.try_fetch(feed).await {
            Ok(records) => {
                info!(feed = %feed.name, entries = records.len(), "fetched feed");
                FeedOutcome {
                    descriptor: feed.clone(),
                    records,
                    warning: None,
                }
            }
            Err(err) => {
                warn!(feed = %feed.name, url = %feed.url, error = %err, "feed skipped");
                FeedOutcome {
                    descriptor: feed.clone(),
                    records: Vec::new(),
                    warning: Some(format!("Failed to fetch {} news: {}", feed.name, err)),
                }
            }
        }
    }

    async fn try_fetch(&self, feed: &FeedDescriptor) -> Result<Vec<NewsRecord>, FetchError> {
        if Path::new(&feed.url).is_file() {
            debug!(path = %feed.url, "reading local feed");
            let bytes = fs::read(&feed.url).map_err(|source| FetchError::Io {
                path: feed.url.clone(),
                source,
            })?;
            if bytes.len() > MAX_FEED_BYTES {
                return Err(FetchError::TooLarge {
                    limit: MAX_FEED_BYTES,
                });
            }
            return records_from_feed(&bytes, feed, None);
        }

        let base = Url::parse(&feed.url).ok();
        let bytes = self.download(&feed.url).await?;
        records_from_feed(&bytes, feed, base.as_ref())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "requesting feed");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Stream with a max size limit
        let mut stream = resp.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if buf.len() + chunk.len() > MAX_FEED_BYTES {
                return Err(FetchError::TooLarge {
                    limit: MAX_FEED_BYTES,
                });
            }
            buf.extend_from_slice(&chunk);
        }
        Ok(buf)
    }
}

/// Parse a feed document and normalize its first [`MAX_ENTRIES_PER_FEED`]
/// entries. A single bad entry fails the whole feed.
pub fn records_from_feed(
    bytes: &[u8],
    feed: &FeedDescriptor,
    base: Option<&Url>,
) -> Result<Vec<NewsRecord>, FetchError> {
    let parsed = parser::Builder::new()
        .timestamp_parser(|s| Some(parse_date(s)))
        .build()
        .parse(bytes)?;

    parsed
        .entries
        .into_iter()
        .take(MAX_ENTRIES_PER_FEED)
        .enumerate()
        .map(|(index, entry)| to_record(index, entry, feed, base))
        .collect()
}

fn to_record(
    index: usize,
    entry: Entry,
    feed: &FeedDescriptor,
    base: Option<&Url>,
) -> Result<NewsRecord, FetchError> {
    let raw_title = entry
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .ok_or(FetchError::MissingTitle { index })?;

    let link = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref().unwrap_or("") == "alternate")
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
        .filter(|href| !href.trim().is_empty())
        .ok_or(FetchError::MissingLink { index })?;

    let summary = entry
        .summary
        .as_ref()
        .map(|s| s.content.clone())
        .unwrap_or_default();

    Ok(NewsRecord {
        title: escape_html(&raw_title),
        description: truncate_description(&clean_html(&summary)),
        link,
        // Undated entries count as just published
        published: entry.published.unwrap_or_else(Utc::now),
        source: feed.name.clone(),
        category: feed.category.clone(),
        image_url: resolve_image(&entry, base),
        sentiment: sentiment::analyze(&format!("{} {}", raw_title, summary)),
    })
}
