//! Lexicon-based polarity scoring.
//!
//! Each word found in the lexicon contributes its polarity. A directly
//! preceding intensifier scales it, and a negator in front of it flips and
//! halves it. The score of a text is the mean over the words that matched,
//! so a single strong word in a long headline still dominates.

mod lexicon;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static POLARITY: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| lexicon::POLARITY.iter().copied().collect());
static INTENSITY: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| lexicon::INTENSIFIERS.iter().copied().collect());

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
}

/// Score `text` and bucket the result.
pub fn analyze(text: &str) -> Sentiment {
    let polarity = polarity(text);
    Sentiment {
        label: SentimentLabel::from_polarity(polarity),
        polarity,
    }
}

pub fn polarity(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .collect();

    let mut sum = 0.0;
    let mut matched = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        let Some(&base) = POLARITY.get(*token) else {
            continue;
        };
        let mut score = base;
        let mut lookback = i;
        if let Some(prev) = i.checked_sub(1).map(|p| tokens[p]) {
            if let Some(&factor) = INTENSITY.get(prev) {
                score *= factor;
                lookback = i - 1;
            }
        }
        if lookback
            .checked_sub(1)
            .map(|p| is_negator(tokens[p]))
            .unwrap_or(false)
        {
            score *= NEGATION_FACTOR;
        }
        sum += score;
        matched += 1;
    }

    if matched == 0 {
        return 0.0;
    }
    (sum / matched as f64).clamp(-1.0, 1.0)
}

fn is_negator(token: &str) -> bool {
    lexicon::NEGATORS.contains(&token) || token.ends_with("n't")
}
