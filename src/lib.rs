//! Compare a page's live title and meta description with how the same page
//! currently appears in search results, and score how far they drifted.

pub mod config;
pub mod export;
pub mod fetchers;
pub mod input;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod similarity;
pub mod utils;

// Re-export commonly used types for convenience
pub use pipeline::{Progress, UrlAnalysisPipeline};
pub use results::{AnalysisTarget, DeviceType, Report, ReportRow};
