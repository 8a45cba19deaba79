//! Chat task — multi-turn Q&A grounded in the profile context.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;

use super::composer;
use super::history::ConversationTurn;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Caller-owned window of prior turns, oldest first. The caller appends
    /// the assistant's reply to its own copy before the next call.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Runs one chat turn. No structured output is expected from this task;
/// the completion is returned verbatim.
pub async fn chat(
    llm: &LlmClient,
    profile: &ProfileContext,
    request: ChatRequest,
) -> Result<ChatReply, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let prompt = composer::chat(profile, &request.history, message);
    let reply = llm.complete(&prompt).await?;

    Ok(ChatReply { reply })
}
