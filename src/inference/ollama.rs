use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;

use super::{Generation, InferenceBackend, InferenceError, TokenUsage};

/// Calls the Ollama `/api/generate` endpoint, one non-streaming request per prompt.
pub struct OllamaBackend {
    client: Client,
    endpoint: Url,
    model: String,
    temperature: f32,
}

impl OllamaBackend {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build Ollama HTTP client")?;

        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid Ollama endpoint: {}", config.endpoint))?;

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl InferenceBackend for OllamaBackend {
    async fn generate(&self, prompt: &str) -> Result<Generation, InferenceError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: Options {
                temperature: self.temperature,
            },
        };

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Status { status, body });
        }

        let bytes = resp.bytes().await.map_err(classify_transport_error)?;
        let api_resp: GenerateResponse =
            serde_json::from_slice(&bytes).map_err(|e| InferenceError::Decode(e.to_string()))?;

        let usage = match (api_resp.prompt_eval_count, api_resp.eval_count) {
            (None, None) => None,
            (input, output) => Some(TokenUsage {
                input_tokens: input.unwrap_or(0),
                output_tokens: output.unwrap_or(0),
            }),
        };

        Ok(Generation {
            text: api_resp.response,
            usage,
        })
    }
}

fn classify_transport_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout
    } else if e.is_connect() {
        InferenceError::Connect(e.to_string())
    } else if e.is_decode() {
        InferenceError::Decode(e.to_string())
    } else {
        InferenceError::Request(e.to_string())
    }
}

// --- API types ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: Options,
}

#[derive(Serialize)]
struct Options {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    prompt_eval_count: Option<u64>,
    eval_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: format!("{}/api/generate", server.uri()),
            timeout: Duration::from_secs(5),
            ..ClassifierConfig::default()
        }
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = ClassifierConfig {
            endpoint: "not a url".to_string(),
            ..ClassifierConfig::default()
        };
        assert!(OllamaBackend::new(&config).is_err());
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            model: "mistral:latest",
            prompt: "hi",
            stream: false,
            options: Options { temperature: 0.5 },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "mistral:latest",
                "prompt": "hi",
                "stream": false,
                "options": {"temperature": 0.5}
            })
        );
    }

    #[tokio::test]
    async fn generate_returns_response_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "mistral:latest",
                "prompt": "classify me",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "mistral:latest",
                "response": " Finance ",
                "done": true,
                "prompt_eval_count": 120,
                "eval_count": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = OllamaBackend::new(&config_for(&server)).unwrap();
        let generation = backend.generate("classify me").await.unwrap();

        assert_eq!(generation.text, " Finance ");
        assert_eq!(
            generation.usage,
            Some(TokenUsage {
                input_tokens: 120,
                output_tokens: 2
            })
        );
    }

    #[tokio::test]
    async fn missing_counts_means_no_usage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "Tech"})),
            )
            .mount(&server)
            .await;

        let backend = OllamaBackend::new(&config_for(&server)).unwrap();
        let generation = backend.generate("p").await.unwrap();
        assert_eq!(generation.text, "Tech");
        assert!(generation.usage.is_none());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let backend = OllamaBackend::new(&config_for(&server)).unwrap();
        let err = backend.generate("p").await.unwrap_err();
        assert_eq!(
            err,
            InferenceError::Status {
                status: 404,
                body: "model not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn body_without_response_field_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "oops"})),
            )
            .mount(&server)
            .await;

        let backend = OllamaBackend::new(&config_for(&server)).unwrap();
        let err = backend.generate("p").await.unwrap_err();
        assert!(matches!(err, InferenceError::Decode(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let backend = OllamaBackend::new(&config_for(&server)).unwrap();
        let err = backend.generate("p").await.unwrap_err();
        assert!(matches!(err, InferenceError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "Tech"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = ClassifierConfig {
            timeout: Duration::from_millis(100),
            ..config_for(&server)
        };
        let backend = OllamaBackend::new(&config).unwrap();
        let err = backend.generate("p").await.unwrap_err();
        assert_eq!(err, InferenceError::Timeout);
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        // Bind then drop to get a port nothing is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ClassifierConfig {
            endpoint: format!("http://127.0.0.1:{port}/api/generate"),
            ..ClassifierConfig::default()
        };
        let backend = OllamaBackend::new(&config).unwrap();
        let err = backend.generate("p").await.unwrap_err();
        assert!(matches!(err, InferenceError::Connect(_)));
    }
}
