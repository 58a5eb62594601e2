//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::protocol::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileLlmConfig;
use async_trait::async_trait;
use debate_application::{GatewayError, LlmGateway};
use tracing::{debug, info};

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: Option<f32>,
}

impl GeminiGateway {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            temperature: None,
        }
    }

    /// Build a gateway from the `[llm]` section, resolving the API key
    pub fn from_config(config: &FileLlmConfig) -> std::result::Result<Self, GatewayError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;

        info!("GeminiGateway initialized (model: {})", config.model);

        Ok(Self::new(api_key, config.model.trim())
            .with_base_url(&config.base_url)
            .with_temperature(config.temperature))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn send(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt, self.temperature);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!("Gemini responded HTTP {} ({} bytes)", status.as_u16(), raw.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map(|body| match body.error.status {
                    Some(code) => format!("{} ({})", body.error.message, code),
                    None => body.error.message,
                })
                .unwrap_or(raw);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: raw.clone(),
            })?;

        parsed.text().ok_or_else(|| GeminiError::Empty {
            finish_reason: parsed.finish_reason(),
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        self.send(prompt).await.map_err(GatewayError::from)
    }
}
