mod common;

use common::{dated_rss, local_feed, make_record, write_fixture};
use news_pulse::config::HttpConfig;
use news_pulse::news::{FeedDescriptor, Fetcher, aggregate, categories, filter_records, sort_newest_first};

fn all() -> Vec<String> {
    vec!["All".to_string()]
}

fn sample() -> Vec<news_pulse::news::NewsRecord> {
    vec![
        make_record("Rover lands on Mars", "NASA confirms touchdown", "Science", 300),
        make_record("Bitcoin rallies", "Markets react to the MARS index", "Cryptocurrency", 200),
        make_record("Election results", "Counting continues overnight", "World", 100),
    ]
}

#[tokio::test]
async fn aggregate_concatenates_and_sorts_newest_first() {
    let a = write_fixture("agg-a.xml", &dated_rss("a", 3, 10));
    let b = write_fixture("agg-b.xml", &dated_rss("b", 4, 12));
    let feeds = vec![
        local_feed("A", "Science", &a),
        FeedDescriptor::new("Down", "http://127.0.0.1:9/rss", "World"),
        local_feed("B", "Finance", &b),
    ];
    let fetcher = Fetcher::new(&HttpConfig::default()).unwrap();

    let result = aggregate(&fetcher, &feeds).await;

    assert_eq!(result.records.len(), 3 + 4);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Down"));
    assert!(
        result
            .records
            .windows(2)
            .all(|w| w[0].published >= w[1].published)
    );
    assert_eq!(result.records[0].title, "b story 0");
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let mut records = vec![
        make_record("first", "", "World", 100),
        make_record("second", "", "World", 100),
        make_record("newest", "", "World", 200),
    ];
    sort_newest_first(&mut records);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "first", "second"]);
}

#[test]
fn empty_search_and_all_keep_everything() {
    let records = sample();
    assert_eq!(filter_records(&records, "", &all()), records);
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    let records = sample();
    let hits = filter_records(&records, "mars", &all());
    let titles: Vec<&str> = hits.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Rover lands on Mars", "Bitcoin rallies"]);

    assert!(filter_records(&records, "jupiter", &all()).is_empty());
}

#[test]
fn category_selection_restricts_results() {
    let records = sample();
    let picked = vec!["World".to_string(), "Science".to_string()];
    let hits = filter_records(&records, "", &picked);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|r| r.category != "Cryptocurrency"));

    let with_all = vec!["World".to_string(), "All".to_string()];
    assert_eq!(filter_records(&records, "", &with_all).len(), 3);

    assert!(filter_records(&records, "", &[]).is_empty());
}

#[test]
fn search_and_category_must_both_hold() {
    let records = sample();
    let hits = filter_records(&records, "mars", &["Science".to_string()]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Rover lands on Mars");
}

#[test]
fn filtering_is_idempotent() {
    let records = sample();
    for (search, cats) in [
        ("", all()),
        ("MARS", all()),
        ("o", vec!["World".to_string()]),
        ("", vec![]),
    ] {
        let once = filter_records(&records, search, &cats);
        let twice = filter_records(&once, search, &cats);
        assert_eq!(once, twice, "search {:?} cats {:?}", search, cats);
    }
}

#[test]
fn categories_start_with_all_and_are_unique() {
    let feeds = vec![
        FeedDescriptor::new("A", "u1", "Technology"),
        FeedDescriptor::new("B", "u2", "Science"),
        FeedDescriptor::new("C", "u3", "Technology"),
    ];
    assert_eq!(categories(&feeds), vec!["All", "Technology", "Science"]);
    assert_eq!(categories(&[]), vec!["All"]);
}
