use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written into the title cell when the page title is unavailable
pub const PAGE_TITLE_ERROR: &str = "Error, title cannot be retrieved";

/// Placeholder written into the description cell when the meta description is unavailable
pub const PAGE_DESCRIPTION_ERROR: &str = "Error, meta description cannot be retrieved";

/// Placeholder written into both SERP cells when no organic result could be read
pub const SERP_NOT_INDEXED: &str = "Error, URL may not be indexed in Google.";

/// Device the search results are requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single URL queued for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTarget {
    url: String,
    device: DeviceType,
}

impl AnalysisTarget {
    pub fn new(url: impl Into<String>, device: DeviceType) -> Self {
        Self {
            url: url.into(),
            device,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn device(&self) -> DeviceType {
        self.device
    }

    /// Build targets for a list of URLs sharing one device type
    pub fn from_urls<I, S>(urls: I, device: DeviceType) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter().map(|url| Self::new(url, device)).collect()
    }
}

/// Title and meta description as served by the page itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields replaced by their error placeholders
    pub fn unavailable() -> Self {
        Self::new(PAGE_TITLE_ERROR, PAGE_DESCRIPTION_ERROR)
    }
}

/// Title and snippet as shown in the search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultMetadata {
    pub title: String,
    pub description: String,
}

impl SearchResultMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn not_indexed() -> Self {
        Self::new(SERP_NOT_INDEXED, SERP_NOT_INDEXED)
    }
}

/// One analyzed URL. Only produced for pages that answered with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub url: String,
    pub status_code: u16,
    pub page_title: String,
    pub search_title: String,
    pub title_match_score: u8,
    pub page_description: String,
    pub search_description: String,
    pub description_match_score: u8,
    pub device_type: DeviceType,
}

/// Why a URL produced no row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// The page answered with something other than 200
    Status(u16),
    /// The page could not be reached at all
    Unreachable(String),
}

/// A URL that was skipped, surfaced to the user instead of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub url: String,
    pub kind: WarningKind,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::Status(code) => write!(
                f,
                "The URL {} returned a {} Status Code and cannot be analyzed.",
                self.url, code
            ),
            WarningKind::Unreachable(reason) => write!(
                f,
                "The URL {} could not be fetched ({}) and cannot be analyzed.",
                self.url, reason
            ),
        }
    }
}

/// Outcome of one run: rows in input order plus the skipped URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
