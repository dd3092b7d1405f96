//! Gemini `generateContent` client.

use std::future::Future;
use std::time::Duration;

use agro_core::conversation::ConversationTurn;

use crate::error::GeminiError;
use crate::http::check_response;
use crate::models::DEFAULT_MODEL;
use crate::wire::{
    Content, FunctionDeclaration, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Tool, UsageMetadata,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One model call: the whole history plus what the model may use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: Option<String>,
    pub history: Vec<ConversationTurn>,
    pub tools: Vec<FunctionDeclaration>,
    pub temperature: Option<f32>,
}

impl ModelRequest {
    /// A single user prompt with no tools.
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            history: vec![ConversationTurn::user_text(text)],
            ..Self::default()
        }
    }
}

/// The model's answer turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub turn: ConversationTurn,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageMetadata>,
}

/// Anything that can answer a [`ModelRequest`].
pub trait LanguageModel {
    fn generate(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, GeminiError>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// HTTP client for the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    options: ClientOptions,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("agro/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            options,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.options.model
    }

    /// Endpoint for the configured model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.options.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.options.model)
        )
    }

    /// Send one prompt and return the answer text.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError`] if the request fails, the API rejects it, or
    /// the answer holds no text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let reply = self.generate(&ModelRequest::prompt(prompt)).await?;
        reply.turn.text().ok_or(GeminiError::EmptyResponse)
    }

    async fn send(&self, request: &ModelRequest) -> Result<ModelReply, GeminiError> {
        let body = build_request(request);
        tracing::debug!(
            model = %self.options.model,
            turns = body.contents.len(),
            tools = request.tools.len(),
            "sending generateContent request"
        );

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let text = resp.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Parse(e.to_string()))?;
        let reply = into_reply(parsed)?;

        if let Some(usage) = &reply.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                answer_tokens = usage.candidates_token_count,
                "generateContent finished"
            );
        }
        Ok(reply)
    }
}

impl LanguageModel for GeminiClient {
    fn generate(
        &self,
        request: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, GeminiError>> + Send {
        self.send(request)
    }
}

/// Wire body for a [`ModelRequest`].
#[must_use]
pub fn build_request(request: &ModelRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: request.history.iter().map(Content::from).collect(),
        system_instruction: request.system_instruction.as_deref().map(Content::text),
        tools: if request.tools.is_empty() {
            Vec::new()
        } else {
            vec![Tool {
                function_declarations: request.tools.clone(),
            }]
        },
        generation_config: request.temperature.map(|temperature| GenerationConfig {
            temperature: Some(temperature),
        }),
    }
}

/// Pick the first candidate, or explain why there is none.
///
/// # Errors
///
/// Returns [`GeminiError::Blocked`] when the prompt or candidate was
/// filtered, and [`GeminiError::EmptyResponse`] when nothing came back.
pub fn into_reply(response: GenerateContentResponse) -> Result<ModelReply, GeminiError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GeminiError::Blocked(reason));
    }
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::EmptyResponse)?;

    let Some(content) = candidate.content.filter(|c| !c.parts.is_empty()) else {
        return match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                Err(GeminiError::Blocked(reason.to_string()))
            }
            _ => Err(GeminiError::EmptyResponse),
        };
    };

    let mut turn = content.into_turn();
    turn.role = agro_core::enums::Role::Model;
    Ok(ModelReply {
        turn,
        finish_reason: candidate.finish_reason,
        usage: response.usage_metadata,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::wire::{Candidate, PromptFeedback};

    #[test]
    fn endpoint_targets_configured_model() {
        let client = GeminiClient::new(
            "k",
            ClientOptions {
                base_url: "http://localhost:8080/v1beta/".into(),
                model: "gemini-1.5-pro".into(),
                ..ClientOptions::default()
            },
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = GeminiClient::new("secret-key", ClientOptions::default()).unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[test]
    fn request_wraps_tools_in_one_block() {
        let request = ModelRequest {
            system_instruction: Some("sys".into()),
            history: vec![ConversationTurn::user_text("oi")],
            tools: vec![FunctionDeclaration {
                name: "create_soil_chart".into(),
                description: "d".into(),
                parameters: serde_json::json!({ "type": "object" }),
            }],
            temperature: None,
        };
        let body = build_request(&request);
        assert_eq!(body.tools.len(), 1);
        assert_eq!(body.tools[0].function_declarations[0].name, "create_soil_chart");
        assert!(body.generation_config.is_none());
        assert!(body.system_instruction.is_some());
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response = GenerateContentResponse {
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("SAFETY".into()),
            }),
            ..GenerateContentResponse::default()
        };
        assert!(matches!(into_reply(response), Err(GeminiError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn safety_stop_without_content_is_blocked() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".into()),
            }],
            ..GenerateContentResponse::default()
        };
        assert!(matches!(into_reply(response), Err(GeminiError::Blocked(_))));
    }

    #[test]
    fn no_candidates_is_empty() {
        assert!(matches!(
            into_reply(GenerateContentResponse::default()),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn reply_turn_is_from_the_model() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content::text("Olá")),
                finish_reason: Some("STOP".into()),
            }],
            ..GenerateContentResponse::default()
        };
        let reply = into_reply(response).unwrap();
        assert_eq!(reply.turn, ConversationTurn::model_text("Olá"));
    }
}
