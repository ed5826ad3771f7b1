use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

// Formats seen in the wild that are neither RFC 2822 nor RFC 3339.
const OFFSET_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%A, %B %d, %Y %H:%M:%S %z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%b %d, %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

// Abbreviations feeds put where RFC 2822 wants a numeric offset.
const ZONE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("GMT", "+0000"),
    ("UTC", "+0000"),
    ("UT", "+0000"),
    ("Z", "+0000"),
    ("EST", "-0500"),
    ("EDT", "-0400"),
    ("CST", "-0600"),
    ("CDT", "-0500"),
    ("MST", "-0700"),
    ("MDT", "-0600"),
    ("PST", "-0800"),
    ("PDT", "-0700"),
];

/// Parse a free-form feed date. Anything unparseable becomes the current time,
/// so a malformed date cannot be told apart from a freshly fetched one.
pub fn parse_date(input: &str) -> DateTime<Utc> {
    try_parse_date(input).unwrap_or_else(Utc::now)
}

/// The parsing half of [`parse_date`], without the "now" fallback.
pub fn try_parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_with_offset(s) {
        return Some(dt);
    }
    if let Some(rewritten) = replace_zone_abbreviation(s) {
        if let Ok(dt) = DateTime::parse_from_rfc2822(&rewritten) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Some(dt) = parse_with_offset(&rewritten) {
            return Some(dt);
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
        }
    }
    None
}

fn parse_with_offset(s: &str) -> Option<DateTime<Utc>> {
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn replace_zone_abbreviation(s: &str) -> Option<String> {
    let (head, tail) = s.rsplit_once(' ')?;
    let offset = ZONE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| tail.eq_ignore_ascii_case(abbr))
        .map(|(_, off)| *off)?;
    Some(format!("{} {}", head, offset))
}
