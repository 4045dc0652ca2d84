use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Model id and temperature are fixed at the call site; the endpoint and key
/// come from configuration.
pub const COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One best-effort request/response exchange with a chat-completion endpoint.
/// No retry, no backoff, no rate limiting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

pub struct OpenAiModel {
    client: Client,
    api_url: String,
    api_key: SecretString,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'static str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

impl OpenAiModel {
    pub fn new(api_url: String, api_key: SecretString) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client options are static and valid");

        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAiModel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let body = ChatCompletionBody {
            model: COMPLETION_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: COMPLETION_TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to decode completion response: {}", e)))?;

        extract_completion_text(&data)
    }
}

/// Pulls the completion text out of a decoded response body, mapping the two
/// upstream failure shapes to their user-visible messages.
fn extract_completion_text(data: &Value) -> AppResult<String> {
    if let Some(error) = data.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(AppError::Upstream(format!("API Error: {}", message)));
    }

    data.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| AppError::Upstream("Empty response from AI model".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_completion_text() {
        let data = json!({
            "choices": [{"message": {"role": "assistant", "content": "[]"}}]
        });
        assert_eq!(extract_completion_text(&data).unwrap(), "[]");
    }

    #[test]
    fn surfaces_api_error_message() {
        let data = json!({"error": {"message": "model overloaded", "type": "server_error"}});
        let err = extract_completion_text(&data).unwrap_err();
        assert_eq!(err.to_string(), "API Error: model overloaded");
    }

    #[test]
    fn missing_content_is_an_empty_response() {
        for data in [json!({}), json!({"choices": []}), json!({"choices": [{"message": {}}]})] {
            let err = extract_completion_text(&data).unwrap_err();
            assert_eq!(err.to_string(), "Empty response from AI model");
        }
    }

    #[test]
    fn request_body_pins_model_and_temperature() {
        let body = ChatCompletionBody {
            model: COMPLETION_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "prompt text",
            }],
            temperature: COMPLETION_TEMPERATURE,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "prompt text");
    }
}
