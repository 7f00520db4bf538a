pub mod html;
pub mod serp;


use thiserror::Error;

/// Why the page's own metadata could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageExtractError {
    #[error("document has no <title> element")]
    MissingTitle,
    #[error("document has no <meta name=\"description\"> tag")]
    MissingDescriptionTag,
    #[error("meta description tag has no content attribute")]
    MissingDescriptionContent,
}

/// Why no search result could be read for a URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerpExtractError {
    #[error("no organic results returned")]
    NoOrganicResults,
    #[error("first organic result has no `{0}` field")]
    MissingField(&'static str),
    #[error("search API returned an error: {0}")]
    ApiError(String),
    #[error("search API unavailable: {0}")]
    Unavailable(String),
}

impl SerpExtractError {
    /// Whether the failure means the URL is simply absent from the index
    pub fn is_not_indexed(&self) -> bool {
        matches!(self, SerpExtractError::NoOrganicResults)
    }
}
