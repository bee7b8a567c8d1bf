//! Hugging Face inference API client.
//!
//! POSTs `{"inputs": text}` to `{endpoint}/{model}` with a bearer token and
//! decodes the `[[{label, score}, ...]]` (or flat) response.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{EnrichmentPort, LabelScore};
use crate::config::EnrichmentConfig;
use crate::error::{AppError, EnrichmentError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoresWire {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ScoresWire {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            ScoresWire::Nested(batches) => batches.into_iter().flatten().collect(),
            ScoresWire::Flat(scores) => scores,
        }
    }
}

/// Client for the Hugging Face text-classification inference endpoint.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_token: String,
    emotion_model: String,
    sentiment_model: String,
}

impl HuggingFaceClient {
    /// Build a client from an active enrichment configuration.
    pub fn new(config: &EnrichmentConfig) -> Result<Self, AppError> {
        let api_token = config
            .api_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::Enrichment(EnrichmentError::NotConfigured))?;

        // Validates the endpoint early instead of on the first request.
        let endpoint = url::Url::parse(&config.endpoint)?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
            api_token,
            emotion_model: config.emotion_model.clone(),
            sentiment_model: config.sentiment_model.clone(),
        })
    }

    fn build_request(&self, model: &str, text: &str) -> reqwest::RequestBuilder {
        let mut headers = HeaderMap::new();
        if let Ok(value) = format!("Bearer {}", self.api_token).parse::<HeaderValue>() {
            headers.insert(AUTHORIZATION, value);
        }

        self.client
            .post(format!("{}/{}", self.endpoint, model))
            .headers(headers)
            .json(&serde_json::json!({ "inputs": text }))
    }

    async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>, EnrichmentError> {
        debug!("Requesting enrichment from model {}", model);

        let res = self.build_request(model, text).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let wire: ScoresWire = serde_json::from_str(&body)?;
        Ok(wire.into_scores())
    }
}

#[async_trait]
impl EnrichmentPort for HuggingFaceClient {
    async fn emotion_scores(&self, text: &str) -> Result<Vec<LabelScore>, EnrichmentError> {
        self.classify(&self.emotion_model, text).await
    }

    async fn sentiment_scores(&self, text: &str) -> Result<Vec<LabelScore>, EnrichmentError> {
        self.classify(&self.sentiment_model, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint: String) -> EnrichmentConfig {
        EnrichmentConfig {
            enabled: true,
            endpoint,
            api_token: Some("hf_test".to_string()),
            emotion_model: "emotion-model".to_string(),
            sentiment_model: "sentiment-model".to_string(),
            timeout_ms: 2_000,
        }
    }

    #[tokio::test]
    async fn test_emotion_scores_success() {
        // 1. Arrange
        let mock_server = MockServer::start().await;
        let client = HuggingFaceClient::new(&test_config(mock_server.uri())).unwrap();

        Mock::given(method("POST"))
            .and(path("/emotion-model"))
            .and(header("authorization", "Bearer hf_test"))
            .and(body_json(json!({ "inputs": "I miss her" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                { "label": "sadness", "score": 0.91 },
                { "label": "neutral", "score": 0.05 }
            ]])))
            .mount(&mock_server)
            .await;

        // 2. Act
        let scores = client.emotion_scores("I miss her").await.unwrap();

        // 3. Assert
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], LabelScore::new("sadness", 0.91));
    }

    #[tokio::test]
    async fn test_flat_payload_accepted() {
        let mock_server = MockServer::start().await;
        let client = HuggingFaceClient::new(&test_config(mock_server.uri())).unwrap();

        Mock::given(method("POST"))
            .and(path("/sentiment-model"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "positive", "score": 0.8 }
            ])))
            .mount(&mock_server)
            .await;

        let scores = client.sentiment_scores("yay").await.unwrap();
        assert_eq!(scores, vec![LabelScore::new("positive", 0.8)]);
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let mock_server = MockServer::start().await;
        let client = HuggingFaceClient::new(&test_config(mock_server.uri())).unwrap();

        Mock::given(method("POST"))
            .and(path("/emotion-model"))
            .respond_with(
                ResponseTemplate::new(503).set_body_string("{\"error\":\"Model is loading\"}"),
            )
            .mount(&mock_server)
            .await;

        let result = client.emotion_scores("hello").await;

        if let Err(EnrichmentError::Status { status, body }) = result {
            assert_eq!(status, 503);
            assert!(body.contains("Model is loading"));
        } else {
            panic!("Expected EnrichmentError::Status, got {:?}", result);
        }
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mock_server = MockServer::start().await;
        let client = HuggingFaceClient::new(&test_config(mock_server.uri())).unwrap();

        Mock::given(method("POST"))
            .and(path("/emotion-model"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&mock_server)
            .await;

        let result = client.emotion_scores("hello").await;
        assert!(matches!(result, Err(EnrichmentError::Malformed(_))));
    }

    #[test]
    fn test_missing_token_is_not_configured() {
        let mut config = test_config("http://localhost:9".to_string());
        config.api_token = Some("  ".to_string());

        let result = HuggingFaceClient::new(&config);
        assert!(matches!(
            result,
            Err(AppError::Enrichment(EnrichmentError::NotConfigured))
        ));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = test_config("not a url".to_string());
        assert!(matches!(HuggingFaceClient::new(&config), Err(AppError::Config(_))));
    }
}
