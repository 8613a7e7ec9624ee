//! Gemini REST API client.
//!
//! Talks to the `generateContent` endpoint directly. Gemini's REST surface is
//! stateless, so the dialogue handle keeps the full turn history and replays
//! it on every call; that is what preserves context across the interview.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rutina_core::{EncodedFile, Result, RutinaError};
use serde::{Deserialize, Serialize};

use crate::model_client::{Dialogue, ModelClient};
use crate::script::DEFAULT_MODEL;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Loads the API key from the process environment.
    ///
    /// A missing key is logged but never fatal: the client is still
    /// constructed and every remote call will fail with a `Remote` error
    /// until the key is provided.
    pub fn try_from_env() -> Self {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                tracing::error!("[GeminiClient] {} is missing from the environment", API_KEY_ENV);
                String::new()
            }
        };

        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl ModelClient for GeminiClient {
    fn open_dialogue(&self, system_instruction: &str) -> Box<dyn Dialogue> {
        Box::new(GeminiDialogue {
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            system_instruction: system_instruction.to_string(),
            history: Vec::new(),
        })
    }
}

/// One stateful Gemini conversation.
///
/// `history` holds the committed turns. A pending user turn is committed,
/// together with the model's reply, only after the request succeeds, so a
/// failed send can simply be retried without duplicating turns.
pub struct GeminiDialogue {
    client: Client,
    api_key: String,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl GeminiDialogue {
    async fn send_turn(&mut self, parts: Vec<Part>) -> Result<Option<String>> {
        let user_turn = Content {
            role: "user".to_string(),
            parts,
        };

        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part::Text {
                    text: self.system_instruction.clone(),
                }],
            }),
        };

        let reply = self.send_request(&request).await?;

        self.history.push(user_turn);
        if let Some(text) = &reply {
            self.history.push(Content {
                role: "model".to_string(),
                parts: vec![Part::Text { text: text.clone() }],
            });
        }

        Ok(reply)
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<Option<String>> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| RutinaError::remote(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| RutinaError::remote(format!("Failed to parse Gemini response: {err}")))?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl Dialogue for GeminiDialogue {
    async fn send_file_turn(&mut self, file: &EncodedFile, text: &str) -> Result<Option<String>> {
        tracing::debug!(
            "[GeminiDialogue] Opening turn with '{}' ({})",
            file.name,
            file.mime_type
        );
        let parts = vec![
            Part::InlineData {
                inline_data: InlineDataPayload {
                    mime_type: file.mime_type.clone(),
                    data: file.data.clone(),
                },
            },
            Part::Text {
                text: text.to_string(),
            },
        ];
        self.send_turn(parts).await
    }

    async fn send_text_turn(&mut self, text: &str) -> Result<Option<String>> {
        let parts = vec![Part::Text {
            text: text.to_string(),
        }];
        self.send_turn(parts).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Clone, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Clone, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Pulls the reply text out of a successful response.
///
/// `None` when the call succeeded but no candidate carried text; callers
/// substitute fallback copy instead of failing.
fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .find_map(|part| part.text.filter(|text| !text.is_empty()))
        })
}

fn map_http_error(status: StatusCode, body: String) -> RutinaError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    RutinaError::remote(format!("HTTP {}: {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_inline_data_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineDataPayload {
                            mime_type: "application/pdf".to_string(),
                            data: "QUJD".to_string(),
                        },
                    },
                    Part::Text {
                        text: "hola".to_string(),
                    },
                ],
            }],
            system_instruction: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        let part = &json["contents"][0]["parts"][0];
        assert_eq!(part["inlineData"]["mimeType"], "application/pdf");
        assert_eq!(part["inlineData"]["data"], "QUJD");
        assert!(json.get("system_instruction").is_none());
    }

    #[test]
    fn test_extract_text_from_response() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"¿Cómo te llamas?"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            extract_text_response(parsed),
            Some("¿Cómo te llamas?".to_string())
        );
    }

    #[test]
    fn test_extract_text_empty_candidates_is_none() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_text_response(parsed), None);

        let parsed: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text_response(parsed), None);
    }

    #[test]
    fn test_extract_text_empty_string_is_none() {
        // An empty text part counts as "no reply" so the fallback copy
        // kicks in, same as a missing part.
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(parsed), None);
    }

    #[test]
    fn test_map_http_error_uses_error_wrapper() {
        let body = r#"{"error":{"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        assert_eq!(
            err,
            RutinaError::remote("HTTP 429: RESOURCE_EXHAUSTED: Quota exceeded")
        );
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err, RutinaError::remote("HTTP 502: upstream down"));
    }
}
