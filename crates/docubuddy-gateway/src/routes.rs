//! API route handlers for the gateway.
//!
//! Every code path out of `/ask` is a 200 with a human-readable `answer`
//! string — the four failure kinds (empty question, missing document, no
//! matching section, completion failure) each map to their own fixed text.

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use docubuddy_assistant::Reply;
use docubuddy_core::error::DocuBuddyError;

use super::server::AppState;

/// Fixed answer for an empty or missing question.
pub const EMPTY_QUESTION_ANSWER: &str = "Please enter a valid question.";

/// Fixed answer when the policy document itself is missing — deliberately
/// distinct from the no-match text.
pub const MISSING_DOC_ANSWER: &str = "⚠️ Internal document file not found.";

/// Friendly fallback when no section scores above threshold.
pub const NO_MATCH_ANSWER: &str = "🤖 Hmm, I couldn’t find anything related to that in our internal documentation.\nYou might want to check with your team lead or refer to the HR portal!";

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

fn answer(text: impl Into<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "answer": text.into() }))
}

/// Answer an employee question from the internal documentation.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> Json<serde_json::Value> {
    let question = body.question.trim();
    if question.is_empty() {
        // User input error — the document is never read for an empty question.
        return answer(EMPTY_QUESTION_ANSWER);
    }

    match state.assistant.answer(question).await {
        Ok(Reply::Answer(text)) => answer(text),
        Ok(Reply::NoMatch) => answer(NO_MATCH_ANSWER),
        Err(DocuBuddyError::DocumentMissing(path)) => {
            tracing::error!("Policy document missing: {path}");
            answer(MISSING_DOC_ANSWER)
        }
        Err(e) => {
            tracing::error!("Completion failed: {e}");
            answer(format!("Error: {e}"))
        }
    }
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "docubuddy-gateway",
        "name": state.config.identity.name,
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.assistant.provider_name(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}
