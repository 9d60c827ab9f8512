use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const MODEL: &str = "gpt-3.5-turbo";
const CONTEXT_LIMIT: usize = 2500;
const ANSWER_MAX_TOKENS: u32 = 200;
const FOLLOW_UP_MAX_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Failed to fetch AI response: {status}. Details: {body}")]
    Provider { status: String, body: String },

    #[error("Completion response contained no choices")]
    EmptyChoices,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> CompletionClient {
        CompletionClient {
            http,
            api_key,
            base_url,
        }
    }

    /// Summarizes `query` against `context`. The context is capped at 2500
    /// characters before it goes upstream; overruns are logged, not errors.
    pub async fn answer(&self, query: &str, context: &str) -> Result<String, CompletionError> {
        let context = enforce_context_limit(context);
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a search engine.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("{query}\n\nContext:\n{context}"),
                },
            ],
            max_tokens: ANSWER_MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let text = self.complete(&request).await?;
        Ok(text.trim().to_string())
    }

    /// Asks the provider for 5 follow-up questions to `query` and returns
    /// the non-blank lines of its reply. No context, and no guarantee that
    /// exactly 5 come back.
    pub async fn follow_ups(&self, query: &str) -> Result<Vec<String>, CompletionError> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a search engine which asks follow-up questions to a query."
                        .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Generate 5 follow-up questions for: {query} and make sure the query word exists in the question"
                    ),
                },
            ],
            max_tokens: FOLLOW_UP_MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let text = self.complete(&request).await?;
        Ok(split_questions(&text))
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_string();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "completion provider returned non-success status");
            return Err(CompletionError::Provider {
                status: status_text,
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        debug!(choices = body.choices.len(), "completion received");
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyChoices)
    }
}

/// Hard character cutoff, not word-aware. Counting chars rather than bytes
/// keeps the slice from splitting a multi-byte code point.
fn enforce_context_limit(context: &str) -> String {
    let length = context.chars().count();
    if length <= CONTEXT_LIMIT {
        return context.to_string();
    }
    warn!(
        length,
        limit = CONTEXT_LIMIT,
        "context too long, truncating"
    );
    context.chars().take(CONTEXT_LIMIT).collect()
}

fn split_questions(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
