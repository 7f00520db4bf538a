use crate::config::{AnalysisConfig, SerpApiConfig};
use crate::fetchers::{FetchError, MetadataSource, WebSource};
use crate::results::DeviceType;
use httpmock::prelude::*;
use serde_json::json;

fn source_for(server: &MockServer) -> WebSource {
    let config = AnalysisConfig::default();
    let serp = SerpApiConfig::new("test-key", server.url("/search.json"));
    WebSource::new(&config, serp).unwrap()
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[tokio::test]
    async fn test_page_sent_with_browser_user_agent() {
        let server = MockServer::start_async().await;
        let user_agent = AnalysisConfig::default().user_agent;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/shoes")
                    .header("user-agent", user_agent.as_str());
                then.status(200)
                    .header("content-type", "text/html; charset=utf-8")
                    .body("<title>Shoes</title>");
            })
            .await;

        let page = source_for(&server)
            .fetch_page(&server.url("/shoes"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(page.is_ok());
        assert_eq!(page.body, "<title>Shoes</title>");
    }

    #[tokio::test]
    async fn test_non_200_status_captured() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gone");
                then.status(404).body("not found");
            })
            .await;

        let page = source_for(&server)
            .fetch_page(&server.url("/gone"))
            .await
            .unwrap();

        assert_eq!(page.status, 404);
        assert!(!page.is_ok());
        assert!(page.body.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let server = MockServer::start_async().await;

        let err = source_for(&server)
            .fetch_page("not a url")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}

#[cfg(test)]
mod serp_tests {
    use super::*;

    #[tokio::test]
    async fn test_query_parameters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search.json")
                    .query_param("api_key", "test-key")
                    .query_param("q", "site:https://example.com/shoes")
                    .query_param("device", "mobile");
                then.status(200).json_body(json!({
                    "organic_results": [{ "title": "Shoes", "snippet": "Buy shoes" }]
                }));
            })
            .await;

        let body = source_for(&server)
            .fetch_serp("https://example.com/shoes", DeviceType::Mobile)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["organic_results"][0]["title"], "Shoes");
    }

    #[tokio::test]
    async fn test_error_status_body_returned() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search.json");
                then.status(401).json_body(json!({ "error": "Invalid API key." }));
            })
            .await;

        let body = source_for(&server)
            .fetch_serp("https://example.com/", DeviceType::Desktop)
            .await
            .unwrap();

        assert_eq!(body["error"], "Invalid API key.");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search.json");
                then.status(502).body("<html>Bad gateway</html>");
            })
            .await;

        let err = source_for(&server)
            .fetch_serp("https://example.com/", DeviceType::Desktop)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidJson(_)));
    }
}
