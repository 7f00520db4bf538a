pub mod source;
pub mod web;

#[cfg(test)]
mod tests;

pub use source::{FetchedPage, MetadataSource};
pub use web::WebSource;

use thiserror::Error;

/// Transport-level failures of either request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search API returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
