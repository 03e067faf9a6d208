//! POST /api/chat: local answer first, chat-completion API as fallback.

use std::sync::Arc;

use ai_llm_service::CompletionOutcome;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::{
        chat_request::ChatRequest,
        chat_response::{ChatOutcome, ChatResponse},
        conversation::build_messages,
    },
};

/// Handler: POST /api/chat
///
/// Only `message` is required. Each `history` turn must carry a `role` of
/// `system`, `user` or `assistant`; any other role rejects the whole request
/// with 400 `{"error": "Bad request"}` instead of being forwarded.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3001/api/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"da toi bi gi vay","woundLabel":"Da thường","woundProb":0.92}'
/// ```
#[instrument(name = "chat_route", skip_all)]
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(req) = payload?;
    let outcome = resolve(&state, &req).await?;
    Ok(Json(outcome.into()))
}

/// Resolves one request: built-in answer if a keyword matches, otherwise a
/// single chat-completion call. Nothing is retried.
///
/// # Errors
/// - [`AppError::Upstream`] when the API answered without `choices`
/// - [`AppError::Llm`] for transport or decode failures
pub async fn resolve(state: &AppState, req: &ChatRequest) -> AppResult<ChatOutcome> {
    if let Some(entry) = state.matcher.find(&req.message) {
        info!(entry = entry.id, "answered from local Q&A");
        return Ok(ChatOutcome::Local(entry));
    }

    let messages = build_messages(req);
    info!(
        history = req.history.as_ref().map_or(0, Vec::len),
        label = req.wound_label.as_deref().unwrap_or("-"),
        "no local match, asking model"
    );

    match state.llm.ask(&messages).await? {
        CompletionOutcome::Reply(reply) => Ok(ChatOutcome::Remote(reply)),
        CompletionOutcome::RateLimited => {
            warn!(model = %state.llm.config().model, "upstream rate limited");
            Ok(ChatOutcome::RateLimited)
        }
        CompletionOutcome::MissingChoices(body) => Err(AppError::Upstream(body)),
    }
}
