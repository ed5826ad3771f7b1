use chrono::{TimeZone, Utc};
use news_pulse::util::date::{parse_date, try_parse_date};

#[test]
fn parses_rfc2822_with_offset() {
    let dt = parse_date("Tue, 05 Mar 2024 14:30:00 -0500");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 19, 30, 0).unwrap());
}

#[test]
fn parses_rfc2822_with_zone_name() {
    let dt = parse_date("Tue, 05 Mar 2024 14:30:00 GMT");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
}

#[test]
fn parses_rfc3339() {
    let dt = parse_date("2024-03-05T14:30:00+02:00");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap());
}

#[test]
fn parses_naive_datetime_as_utc() {
    let dt = parse_date("2024-03-05 14:30:00");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
}

#[test]
fn parses_bare_and_long_dates() {
    let midnight = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(parse_date("2024-03-05"), midnight);
    assert_eq!(parse_date("March 05, 2024"), midnight);
    assert_eq!(parse_date("5 Mar 2024"), midnight);
}

#[test]
fn malformed_dates_fall_back_to_now() {
    for input in ["", "   ", "yesterday-ish", "32/13/2024", "Tue, 99 Foo 2024", "\u{0}"] {
        assert!(try_parse_date(input).is_none(), "{:?} should not parse", input);
        let before = Utc::now();
        let dt = parse_date(input);
        let after = Utc::now();
        assert!(dt >= before && dt <= after, "{:?} gave {}", input, dt);
    }
}
