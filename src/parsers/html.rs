use crate::parsers::PageExtractError;
use crate::results::PageMetadata;
use scraper::{Html, Selector};

/// Extracts the title and meta description from an HTML document,
/// falling back to the error placeholders when either is missing
pub fn extract(html: &str) -> PageMetadata {
    try_extract(html).unwrap_or_else(|e| {
        ::log::warn!("Page metadata unavailable: {}", e);
        PageMetadata::unavailable()
    })
}

/// Extracts the title and meta description, reporting which part is missing.
///
/// Values are returned verbatim: no trimming or whitespace normalization.
pub fn try_extract(html: &str) -> Result<PageMetadata, PageExtractError> {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or(PageExtractError::MissingTitle)?;

    let meta_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
    let description = doc
        .select(&meta_selector)
        .next()
        .ok_or(PageExtractError::MissingDescriptionTag)?
        .value()
        .attr("content")
        .ok_or(PageExtractError::MissingDescriptionContent)?
        .to_string();

    ::log::debug!(
        "HTML parser found title ({} chars) and description ({} chars)",
        title.len(),
        description.len()
    );

    Ok(PageMetadata { title, description })
}
