use crate::parsers::SerpExtractError;
use crate::results::SearchResultMetadata;
use serde_json::Value;

/// Extracts the first organic result's title and snippet for `url`,
/// falling back to the "not indexed" placeholders
pub fn extract(url: &str, response: &Value) -> SearchResultMetadata {
    try_extract(response).unwrap_or_else(|e| fallback(url, &e))
}

/// Placeholder metadata for a URL whose search result could not be read,
/// logging the offending URL
pub fn fallback(url: &str, error: &SerpExtractError) -> SearchResultMetadata {
    if error.is_not_indexed() {
        ::log::warn!("{} may not be indexed in Google", url);
    } else {
        ::log::warn!("{} experienced an error reading search results: {}", url, error);
    }
    SearchResultMetadata::not_indexed()
}

/// Reads `organic_results[0].title` and `organic_results[0].snippet`
pub fn try_extract(response: &Value) -> Result<SearchResultMetadata, SerpExtractError> {
    let first = match response.get("organic_results").and_then(Value::as_array) {
        Some(results) => results.first().ok_or(SerpExtractError::NoOrganicResults)?,
        None => {
            // The API reports failures as `{"error": "..."}` instead of a result list
            if let Some(message) = response.get("error").and_then(Value::as_str) {
                return Err(SerpExtractError::ApiError(message.to_string()));
            }
            return Err(SerpExtractError::NoOrganicResults);
        }
    };

    let title = string_field(first, "title")?;
    let description = string_field(first, "snippet")?;

    Ok(SearchResultMetadata { title, description })
}

fn string_field(result: &Value, key: &'static str) -> Result<String, SerpExtractError> {
    result
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SerpExtractError::MissingField(key))
}
