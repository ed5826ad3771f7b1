use thiserror::Error;

/// Why a single feed contributed nothing to a render pass.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
    #[error("feed larger than {limit} bytes")]
    TooLarge { limit: usize },
    #[error("malformed feed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
    #[error("entry {index} has no title")]
    MissingTitle { index: usize },
    #[error("entry {index} has no link")]
    MissingLink { index: usize },
}
