use feed_rs::model::Entry;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200?text=No+Image";

static IMG_SRC_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).ok());

/// Pick a card image for `entry`: structured media first, then the first
/// `<img>` in its HTML, then [`PLACEHOLDER_IMAGE`].
pub fn resolve_image(entry: &Entry, base: Option<&Url>) -> String {
    if let Some(url) = media_url(entry) {
        return url;
    }
    let html = entry
        .content
        .as_ref()
        .and_then(|c| c.body.as_deref())
        .filter(|body| !body.is_empty())
        .or_else(|| entry.summary.as_ref().map(|s| s.content.as_str()))
        .unwrap_or("");
    image_from_html(html, base).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

// Only the first media item counts, and only when it is an image. feed-rs also
// files `<enclosure>` audio and video under media content.
fn media_url(entry: &Entry) -> Option<String> {
    let first = entry.media.iter().flat_map(|m| m.content.iter()).next()?;
    let is_image = first
        .content_type
        .as_ref()
        .map(|ct| ct.to_string().starts_with("image/"))
        .unwrap_or(true);
    if !is_image {
        return None;
    }
    first.url.as_ref().map(|u| u.to_string())
}

/// First `<img src>` in `html` that resolves, against `base`, to an http(s)
/// URL. `data:` pixels and unresolvable paths are skipped.
pub fn image_from_html(html: &str, base: Option<&Url>) -> Option<String> {
    let re = IMG_SRC_RE.as_ref()?;
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .find_map(|src| resolve_src(src.as_str().trim(), base))
}

fn resolve_src(src: &str, base: Option<&Url>) -> Option<String> {
    let resolved = match Url::parse(src) {
        Ok(u) => u,
        Err(_) => base?.join(src).ok()?,
    };
    match resolved.scheme() {
        "http" | "https" => Some(resolved.into()),
        _ => None,
    }
}
