use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::provider::{LlmError, LlmProvider, Message, Role};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point at a different endpoint (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Build the request body for the Gemini generateContent API.
    fn build_request_body(
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> serde_json::Value {
        // Gemini takes the system prompt as a separate system_instruction field
        let system_msg = messages
            .iter()
            .find(|m| matches!(m.role, Role::System))
            .map(|m| m.content.clone());

        let contents: Vec<serde_json::Value> = messages
            .iter()
            .filter(|m| !matches!(m.role, Role::System))
            .map(|m| {
                json!({
                    "role": match m.role {
                        Role::Assistant => "model",
                        _ => "user",
                    },
                    "parts": [{ "text": m.content }],
                })
            })
            .collect();

        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "temperature": temperature,
                "maxOutputTokens": max_tokens,
            },
        });

        if let Some(system) = system_msg {
            body["system_instruction"] = json!({
                "parts": [{ "text": system }],
            });
        }

        body
    }

    /// Pull the generated text out of a generateContent response.
    fn extract_text(resp: &serde_json::Value) -> Result<String, LlmError> {
        let parts = resp["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| LlmError::ParseError("missing candidates[0].content.parts".into()))?;

        let text: String = parts
            .iter()
            .filter_map(|p| p["text"].as_str())
            .collect();

        if text.is_empty() {
            return Err(LlmError::ParseError(
                "missing candidates[0].content.parts[*].text".into(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let url = self.endpoint();
        let body = Self::build_request_body(&messages, temperature, max_tokens);

        debug!("Gemini request to model={}", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        Self::extract_text(&resp)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Message, Role};

    #[test]
    fn test_request_body_structure() {
        let messages = vec![
            Message::system("You are a support analyst."),
            Message::user("Summarize TK-001"),
            Message {
                role: Role::Assistant,
                content: "Login failure.".into(),
            },
            Message::user("Shorter please"),
        ];

        let body = GeminiProvider::build_request_body(&messages, 0.4, 2048);

        assert_eq!(
            body["system_instruction"]["parts"][0]["text"].as_str().unwrap(),
            "You are a support analyst.",
        );

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "Summarize TK-001");
        // Gemini calls the assistant "model"
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");

        let temp = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.4).abs() < 1e-6, "temperature should be ~0.4, got {temp}");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_request_body_without_system() {
        let messages = vec![Message::user("Hello")];
        let body = GeminiProvider::build_request_body(&messages, 0.5, 256);
        assert!(body.get("system_instruction").is_none());
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn extract_text_joins_parts() {
        let resp = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Alice reports " }, { "text": "a billing issue." }]
                }
            }]
        });
        assert_eq!(
            GeminiProvider::extract_text(&resp).unwrap(),
            "Alice reports a billing issue."
        );
    }

    #[test]
    fn extract_text_rejects_blocked_response() {
        let resp = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(
            GeminiProvider::extract_text(&resp),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn endpoint_uses_model_and_base_url() {
        let p = GeminiProvider::new("k".into(), "gemini-1.5-flash".into())
            .with_base_url("http://127.0.0.1:9/");
        assert_eq!(
            p.endpoint(),
            "http://127.0.0.1:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        // Port 9 (discard) is closed on test hosts; connection is refused.
        let p = GeminiProvider::new("k".into(), "gemini-1.5-flash".into())
            .with_base_url("http://127.0.0.1:9");
        let err = p
            .complete(vec![Message::user("hi")], 0.1, 16)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::HttpError(_)));
    }
}
