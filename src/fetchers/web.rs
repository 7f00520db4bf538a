use crate::config::{AnalysisConfig, SerpApiConfig};
use crate::fetchers::{FetchError, FetchedPage, MetadataSource};
use crate::results::DeviceType;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use url::Url;

/// HTTP-backed source: one shared client for both the page and the search API.
///
/// No timeout and no retry are configured; each URL gets a single attempt.
pub struct WebSource {
    client: reqwest::Client,
    user_agent: String,
    serp: SerpApiConfig,
}

impl WebSource {
    pub fn new(config: &AnalysisConfig, serp: SerpApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            serp,
        })
    }
}

impl MetadataSource for WebSource {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status().as_u16();
        ::log::debug!("Fetched {} with status {}", url, status);

        let body = if status == 200 {
            response.text().await?
        } else {
            String::new()
        };

        Ok(FetchedPage { status, body })
    }

    async fn fetch_serp(&self, url: &str, device: DeviceType) -> Result<Value, FetchError> {
        let query = format!("site:{url}");

        let response = self
            .client
            .get(&self.serp.query_url)
            .query(&[
                ("api_key", self.serp.api_key.as_str()),
                ("q", query.as_str()),
                ("device", device.as_str()),
            ])
            .send()
            .await?;

        // Error responses still carry a JSON body with an `error` field
        let status = response.status();
        if !status.is_success() {
            ::log::debug!("Search API answered {} for {}", status, url);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
