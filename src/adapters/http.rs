use crate::domain::model::DreamVerdict;
use crate::domain::ports::DreamService;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Sentinel the validation endpoint returns for an accepted dream. Anything
/// else in `content` is treated as the rejection reason. Versionless
/// convention owned by the remote service.
const VALID_SENTINEL: &str = "valid";

#[derive(Debug, Serialize)]
struct DreamPayload<'a> {
    dreams: &'a str,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
}

/// `DreamService` backed by the remote HTTP API. No timeouts are set on
/// requests; an abandoned request is simply dropped with the client.
#[derive(Debug, Clone)]
pub struct HttpDreamService {
    base_url: String,
    client: Client,
}

impl HttpDreamService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_content(&self, path: &str, dream: &str) -> Result<String> {
        let endpoint = self.endpoint(path);
        tracing::debug!("📡 POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(&DreamPayload { dreams: dream })
            .send()
            .await?;

        tracing::debug!("📡 {} response status: {}", path, response.status());
        let body: ContentResponse = response.error_for_status()?.json().await?;
        Ok(body.content)
    }

    async fn get_content(&self, path: &str) -> Result<String> {
        let endpoint = self.endpoint(path);
        tracing::debug!("📡 GET {}", endpoint);

        let response = self.client.get(&endpoint).send().await?;
        tracing::debug!("📡 {} response status: {}", path, response.status());
        let body: ContentResponse = response.error_for_status()?.json().await?;
        Ok(body.content)
    }
}

#[async_trait]
impl DreamService for HttpDreamService {
    async fn health(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("health")).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    async fn validate_dream(&self, dream: &str) -> Result<DreamVerdict> {
        let content = self.post_content("validate_dream", dream).await?;
        if content == VALID_SENTINEL {
            Ok(DreamVerdict::Valid)
        } else {
            Ok(DreamVerdict::Rejected(content))
        }
    }

    async fn generate_reflection(&self, dream: &str) -> Result<String> {
        self.post_content("dreams", dream).await
    }

    async fn random_dream(&self) -> Result<String> {
        self.get_content("random_dream").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_validate_dream_valid_sentinel() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/validate_dream")
                .json_body(serde_json::json!({"dreams": "travel the world"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"content": "valid"}));
        });

        let service = HttpDreamService::new(server.base_url());
        let verdict = service.validate_dream("travel the world").await.unwrap();

        api_mock.assert();
        assert_eq!(verdict, DreamVerdict::Valid);
    }

    #[tokio::test]
    async fn test_validate_dream_rejection_reason() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/validate_dream");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"content": "no"}));
        });

        let service = HttpDreamService::new(server.base_url());
        let verdict = service.validate_dream("asdfgh").await.unwrap();

        api_mock.assert();
        assert_eq!(verdict, DreamVerdict::Rejected("no".to_string()));
    }

    #[tokio::test]
    async fn test_validate_dream_http_error_is_transport_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/validate_dream");
            then.status(500);
        });

        let service = HttpDreamService::new(server.base_url());
        let result = service.validate_dream("travel the world").await;

        api_mock.assert();
        assert_err!(result);
    }

    #[tokio::test]
    async fn test_generate_reflection_returns_content() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/dreams")
                .json_body(serde_json::json!({"dreams": "write a novel"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"content": "Dear present self, the novel is real."}));
        });

        let service = HttpDreamService::new(server.base_url());
        let reflection = service.generate_reflection("write a novel").await.unwrap();

        api_mock.assert();
        assert_eq!(reflection, "Dear present self, the novel is real.");
    }

    #[tokio::test]
    async fn test_random_dream_returns_content() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/random_dream");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"content": "Master the art of cooking"}));
        });

        let service = HttpDreamService::new(server.base_url());
        let dream = service.random_dream().await.unwrap();

        api_mock.assert();
        assert_eq!(dream, "Master the art of cooking");
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200);
        });

        let service = HttpDreamService::new(server.base_url());
        assert_ok!(service.health().await);
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_health_check_unavailable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        });

        let service = HttpDreamService::new(server.base_url());
        assert_err!(service.health().await);
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_malformed_response_body_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/random_dream");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"unexpected": "shape"}));
        });

        let service = HttpDreamService::new(server.base_url());
        assert_err!(service.random_dream().await);
        api_mock.assert();
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let service = HttpDreamService::new("https://example.com/");
        assert_eq!(service.base_url(), "https://example.com");
        assert_eq!(service.endpoint("health"), "https://example.com/health");
    }
}
