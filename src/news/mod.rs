mod fetch;
mod image;
mod model;

use crate::config::{ALL_CATEGORIES, DisplayConfig};
use tracing::info;

pub use fetch::{Fetcher, MAX_ENTRIES_PER_FEED, records_from_feed};
pub use image::{PLACEHOLDER_IMAGE, image_from_html, resolve_image};
pub use model::{Aggregate, FeedDescriptor, FeedOutcome, NewsRecord, Page};

/// Fetch every feed, one after another, and merge the results newest first.
pub async fn aggregate(fetcher: &Fetcher, feeds: &[FeedDescriptor]) -> Aggregate {
    let mut all = Aggregate::default();
    for feed in feeds {
        let outcome = fetcher.fetch(feed).await;
        all.records.extend(outcome.records);
        all.warnings.extend(outcome.warning);
    }
    sort_newest_first(&mut all.records);
    all
}

/// Stable, so records with equal timestamps keep feed order.
pub fn sort_newest_first(records: &mut [NewsRecord]) {
    records.sort_by(|a, b| b.published.cmp(&a.published));
}

/// Keep records whose title or description contains `search` (ignoring case)
/// and whose category is selected. `"All"` selects every category; an empty
/// selection selects none.
pub fn filter_records(records: &[NewsRecord], search: &str, categories: &[String]) -> Vec<NewsRecord> {
    let needle = search.to_lowercase();
    let any_category = categories.iter().any(|c| c == ALL_CATEGORIES);
    records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .filter(|r| any_category || categories.iter().any(|c| *c == r.category))
        .cloned()
        .collect()
}

/// Options for the category picker: `"All"` then each category once, in feed order.
pub fn categories(feeds: &[FeedDescriptor]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for feed in feeds {
        if !out.contains(&feed.category) {
            out.push(feed.category.clone());
        }
    }
    out
}

/// One full render pass: fetch everything again, then filter. Nothing is cached.
pub async fn render_pass(fetcher: &Fetcher, feeds: &[FeedDescriptor], display: &DisplayConfig) -> Page {
    let all = aggregate(fetcher, feeds).await;
    let records = filter_records(&all.records, &display.search, &display.categories);
    info!(
        total = all.records.len(),
        shown = records.len(),
        failed_feeds = all.warnings.len(),
        "render pass complete"
    );
    Page {
        total: all.records.len(),
        records,
        warnings: all.warnings,
    }
}
