use crate::fetchers::FetchError;
use crate::results::DeviceType;
use serde_json::Value;
use std::future::Future;

/// A fetched page: the status code is always captured, the body only on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The two independent data sources consulted for every URL
pub trait MetadataSource {
    /// Fetch the live page with a browser User-Agent
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>>;

    /// Query the search API for `site:<url>` on the given device and return its JSON body
    fn fetch_serp(
        &self,
        url: &str,
        device: DeviceType,
    ) -> impl Future<Output = Result<Value, FetchError>>;
}
