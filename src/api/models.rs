use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::orchestrator::AskOutcome;
use crate::search::SearchResult;

// Input fields default to empty rather than rejecting at deserialization,
// so an absent field gets the 400 + error body instead of an axum 422.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> ErrorBody {
        ErrorBody {
            error: message.into(),
        }
    }
}

/// Successful response for both routes. The echoed input travels in a
/// flattened single-entry map so the two routes can keep their different
/// field names (`query` vs `question`) over one shared shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    #[serde(flatten)]
    echo: Map<String, Value>,
    pub search_results: Vec<SearchResult>,
    pub ai_response: String,
    pub follow_up_questions: Vec<String>,
}

impl AskResponse {
    pub fn new(echo_key: &str, input: &str, outcome: AskOutcome) -> AskResponse {
        let mut echo = Map::new();
        echo.insert(echo_key.to_string(), Value::String(input.to_string()));
        AskResponse {
            echo,
            search_results: outcome.search_results,
            ai_response: outcome.ai_response,
            follow_up_questions: outcome.follow_up_questions,
        }
    }
}
