// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` API request/response types.
//!
//! The streaming endpoint (`streamGenerateContent?alt=sse`) emits the same
//! [`GenerateContentResponse`] shape as incremental chunks, so one set of
//! types covers both modes.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents. Pagechat sends a single user turn carrying
    /// the fully rendered prompt.
    pub contents: Vec<Content>,

    /// Generation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds a single-turn user request from a rendered prompt.
    pub fn from_prompt(prompt: &str, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig { max_output_tokens }),
        }
    }
}

/// Generation parameters for a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
}

/// A content entry: a role plus ordered text parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model". Optional in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part within a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

// --- Response types ---

/// A full response from `generateContent`, or one chunk of a streaming
/// response from `streamGenerateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates. Gemini returns at most one for Pagechat requests.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Feedback about the prompt itself (set when the prompt was blocked).
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .as_ref()
                    .map(|content| {
                        content
                            .parts
                            .iter()
                            .map(|p| p.text.as_str())
                            .collect::<Vec<_>>()
                            .join("")
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Returns the safety-block reason when the prompt or response was
    /// filtered, `None` otherwise.
    pub fn block_reason(&self) -> Option<String> {
        if let Some(feedback) = &self.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Some(format!("prompt blocked: {reason}"));
        }
        let finish = self.candidates.first()?.finish_reason.as_deref()?;
        if finish.eq_ignore_ascii_case("safety") {
            return Some("response blocked due to SAFETY".to_string());
        }
        None
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content. Absent when generation was blocked.
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped ("STOP", "MAX_TOKENS", "SAFETY", ...).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Prompt-level feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt itself was blocked (e.g. "SAFETY").
    #[serde(default)]
    pub block_reason: Option<String>,
}

// --- Error types ---

/// Error body returned by the Gemini REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Detail of a Gemini API error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP status code echoed in the body.
    #[serde(default)]
    pub code: Option<i64>,

    /// Human-readable error message.
    pub message: String,

    /// gRPC status name (e.g. "INVALID_ARGUMENT", "RESOURCE_EXHAUSTED").
    #[serde(default)]
    pub status: Option<String>,
}
