//! OpenAiBackend - direct REST implementation of [`TextBackend`].
//!
//! Calls the OpenAI Chat Completions API without any CLI dependency.
//! Configuration comes from the constructor or environment variables.

use crate::backend::TextBackend;
use async_trait::async_trait;
use moot_core::{MootError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

const DEFAULT_MODEL: &str = "gpt-4o";
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Backend implementation that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl OpenAiBackend {
    /// Creates a new backend with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL_NAME` defaults to
    /// `gpt-4o` when unset.
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            MootError::config("OPENAI_API_KEY not found in environment variables")
        })?;
        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        debug!(model = %body.model, "sending chat completion request");
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| MootError::generation(format!("OpenAI API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            MootError::generation(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl TextBackend for OpenAiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| MootError::generation("OpenAI API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> MootError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    MootError::generation(format!("OpenAI API error ({}): {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_prefer_the_structured_message() {
        let body = r#"{"error":{"message":"Rate limit reached"}}"#.to_string();
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(
            err,
            MootError::Generation("OpenAI API error (429): Rate limit reached".to_string())
        );
    }

    #[test]
    fn http_errors_fall_back_to_the_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(err, MootError::Generation(msg) if msg.contains("upstream down")));
    }

    #[test]
    fn request_omits_unset_sampling_fields() {
        let request = ChatCompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }
}
