use news_pulse::sentiment::{SentimentLabel, analyze, polarity};

#[test]
fn positive_text() {
    let s = analyze("wonderful great success");
    assert_eq!(s.label, SentimentLabel::Positive);
    assert!(s.polarity > 0.0, "polarity {}", s.polarity);
    assert!((s.polarity - 0.7).abs() < 1e-9);
}

#[test]
fn negative_text() {
    let s = analyze("Terrible disaster as markets crash");
    assert_eq!(s.label, SentimentLabel::Negative);
    assert!(s.polarity < 0.0, "polarity {}", s.polarity);
}

#[test]
fn neutral_text() {
    let s = analyze("The committee met on Tuesday to discuss the schedule");
    assert_eq!(s.label, SentimentLabel::Neutral);
    assert_eq!(s.polarity, 0.0);
    assert_eq!(analyze("").label, SentimentLabel::Neutral);
}

#[test]
fn negation_flips_and_halves() {
    assert!((polarity("not good") - (-0.35)).abs() < 1e-9);
    assert!((polarity("isn't good") - (-0.35)).abs() < 1e-9);
}

#[test]
fn intensifiers_scale_and_result_is_clamped() {
    assert!((polarity("very good") - 0.91).abs() < 1e-9);
    assert!((polarity("not very good") - (-0.455)).abs() < 1e-9);
    assert_eq!(polarity("extremely perfect"), 1.0);
    assert_eq!(polarity("absolutely worst"), -1.0);
}

#[test]
fn punctuation_and_case_are_ignored() {
    assert_eq!(polarity("GREAT!!!"), polarity("great"));
    assert_eq!(polarity("<b>Great</b>, news."), polarity("great news"));
}

#[test]
fn labels_display() {
    assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
    assert_eq!(SentimentLabel::from_polarity(-0.01), SentimentLabel::Negative);
    assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
}
