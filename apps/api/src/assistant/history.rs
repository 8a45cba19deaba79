//! Conversation windowing for the chat task.
//!
//! History is caller-owned: every request supplies the full window and the
//! core stores nothing between calls. The caller appends the assistant's
//! reply to its own copy before the next turn.

use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatMessage, Role};

/// Maximum number of prior turns replayed to the service. Older turns are
/// dropped, never summarized.
pub const MAX_WINDOW_TURNS: usize = 10;

/// One prior turn as supplied by the caller. Order is significant and is
/// replayed verbatim; role alternation is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Builds the ordered message list for one chat call: at most the last
/// `MAX_WINDOW_TURNS` supplied turns, with the new user message appended.
pub fn windowed(history: &[ConversationTurn], new_message: &str) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(MAX_WINDOW_TURNS);
    let mut messages: Vec<ChatMessage> = history[start..]
        .iter()
        .map(|turn| ChatMessage {
            role: turn.role,
            content: turn.content.clone(),
        })
        .collect();
    messages.push(ChatMessage {
        role: Role::User,
        content: new_message.to_string(),
    });
    messages
}
