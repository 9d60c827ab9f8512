use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::error;

use crate::orchestrator::Orchestrator;

use super::models::{AskResponse, ErrorBody, FollowupRequest, QueryRequest};

type HandlerError = (StatusCode, Json<ErrorBody>);

pub async fn query_handler(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    run_query(&orchestrator, &request.query, "query", "Ask something").await
}

pub async fn followup_handler(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<FollowupRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    run_query(&orchestrator, &request.question, "question", "Question required").await
}

/// The two routes differ only in input/echo field name and missing-input
/// message; everything else runs through here.
async fn run_query(
    orchestrator: &Orchestrator,
    input: &str,
    echo_key: &str,
    missing_message: &str,
) -> Result<Json<AskResponse>, HandlerError> {
    if input.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::new(missing_message))));
    }

    let outcome = orchestrator.ask(input).await.map_err(|e| {
        error!(error = %e, "question pipeline failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(e.to_string())),
        )
    })?;

    Ok(Json(AskResponse::new(echo_key, input, outcome)))
}
