use regex::Regex;
use std::sync::LazyLock;

/// Number of characters of a summary kept on a card.
pub const DESCRIPTION_CHARS: usize = 150;

static TAG_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").ok());
static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]").ok());

/// Strip every `<...>` run and decode HTML entities.
///
/// This is a regex pass, not an HTML parser: a stray `<` without a closing `>`
/// is left in place.
pub fn clean_html(raw: &str) -> String {
    let stripped = match TAG_RE.as_ref() {
        Some(re) => re.replace_all(raw, "").into_owned(),
        None => raw.to_string(),
    };
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Escape `& < > " '` so the text can be dropped into markup.
pub fn escape_html(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Keep the first [`DESCRIPTION_CHARS`] characters and append `...`.
///
/// The marker is appended even when nothing was cut.
pub fn truncate_description(s: &str) -> String {
    let mut out: String = s.chars().take(DESCRIPTION_CHARS).collect();
    out.push_str("...");
    out
}

// Remove ANSI escape sequences and non-printable control chars from untrusted text
// Collapse newlines/tabs to spaces and truncate to a reasonable length for terminal display.
pub fn sanitize_for_terminal(s: &str) -> String {
    let no_ansi = match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    };

    // Tabs and newlines become spaces, other C0 controls and DEL go away
    let cleaned: String = no_ansi
        .chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            c if c < ' ' || c == '\x7f' => None,
            c => Some(c),
        })
        .collect();

    // Truncate to 200 chars to avoid overly wide UI
    cleaned.trim().chars().take(200).collect()
}
