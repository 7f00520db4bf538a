//! Per-URL fetch, extract and compare pass.
//!
//! URLs are processed strictly one at a time in input order. A URL whose page
//! does not answer 200 becomes a [`Warning`]; every other URL becomes exactly
//! one [`ReportRow`], with placeholders in the cells that could not be read.


use crate::fetchers::MetadataSource;
use crate::parsers::{SerpExtractError, html, serp};
use crate::results::{
    AnalysisTarget, PageMetadata, Report, ReportRow, SearchResultMetadata, Warning, WarningKind,
};
use crate::similarity;
use std::fmt;

/// Default analysis cap per run
pub const DEFAULT_LIMIT: usize = 50;

/// Emitted before each URL is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    pub url: &'a str,
    /// 1-based position of the URL in the run
    pub current: usize,
    /// Number of URLs analyzed in this run (after the cap)
    pub total: usize,
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Analyzing :: {} :: {} of {}",
            self.url, self.current, self.total
        )
    }
}

/// Runs the analysis over a list of targets using one metadata source
pub struct UrlAnalysisPipeline<S> {
    source: S,
    limit: usize,
}

impl<S: MetadataSource> UrlAnalysisPipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the maximum number of URLs analyzed per run
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Analyze the first `limit` targets in order and collect the report.
    ///
    /// Never fails as a whole: unreachable or non-200 pages become warnings,
    /// unreadable metadata becomes placeholder text.
    pub async fn run<F>(&self, targets: &[AnalysisTarget], mut on_progress: F) -> Report
    where
        F: FnMut(&Progress<'_>),
    {
        let selected = &targets[..targets.len().min(self.limit)];
        if selected.len() < targets.len() {
            ::log::info!(
                "Analyzing first {} of {} URLs",
                selected.len(),
                targets.len()
            );
        }

        let mut report = Report::new();

        for (index, target) in selected.iter().enumerate() {
            on_progress(&Progress {
                url: target.url(),
                current: index + 1,
                total: selected.len(),
            });

            match self.analyze(target).await {
                Ok(row) => report.rows.push(row),
                Err(warning) => {
                    ::log::warn!("{}", warning);
                    report.warnings.push(warning);
                }
            }
        }

        ::log::info!(
            "Analysis complete - {} rows, {} skipped",
            report.rows.len(),
            report.warnings.len()
        );

        report
    }

    /// Analyze one target into a row, or the warning explaining why there is none
    pub async fn analyze(&self, target: &AnalysisTarget) -> Result<ReportRow, Warning> {
        let url = target.url();
        ::log::info!("Analyzing {}", url);

        let page = self.source.fetch_page(url).await.map_err(|e| Warning {
            url: url.to_string(),
            kind: WarningKind::Unreachable(e.to_string()),
        })?;

        if !page.is_ok() {
            return Err(Warning {
                url: url.to_string(),
                kind: WarningKind::Status(page.status),
            });
        }

        let page_metadata = html::extract(&page.body);

        let serp_metadata = match self
            .source
            .fetch_serp(url, target.device())
            .await
        {
            Ok(response) => serp::extract(url, &response),
            Err(e) => serp::fallback(url, &SerpExtractError::Unavailable(e.to_string())),
        };

        Ok(build_row(target, page.status, page_metadata, serp_metadata))
    }
}

fn build_row(
    target: &AnalysisTarget,
    status_code: u16,
    page: PageMetadata,
    search: SearchResultMetadata,
) -> ReportRow {
    ReportRow {
        url: target.url().to_string(),
        status_code,
        title_match_score: similarity::score(&page.title, &search.title),
        description_match_score: similarity::score(&page.description, &search.description),
        page_title: page.title,
        search_title: search.title,
        page_description: page.description,
        search_description: search.description,
        device_type: target.device(),
    }
}
