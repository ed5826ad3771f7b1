use crate::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One configured syndication source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDescriptor {
    pub name: String,
    pub url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".into()
}

impl FeedDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            category: category.into(),
        }
    }
}

/// A normalized feed entry, ready for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    /// Already HTML-escaped.
    pub title: String,
    pub description: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub source: String,
    pub category: String,
    pub image_url: String,
    pub sentiment: Sentiment,
}

/// What one feed contributed to a render pass.
#[derive(Debug, Clone)]
pub struct FeedOutcome {
    pub descriptor: FeedDescriptor,
    pub records: Vec<NewsRecord>,
    /// User-facing message when the feed failed as a whole.
    pub warning: Option<String>,
}

/// Every record of every feed, newest first.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub records: Vec<NewsRecord>,
    pub warnings: Vec<String>,
}

/// The filtered result of one render pass.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub records: Vec<NewsRecord>,
    pub warnings: Vec<String>,
    /// Records before filtering.
    pub total: usize,
}
