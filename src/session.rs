//! Conversation session management
//!
//! Maintains per-conversation continuity through the caller-owned
//! [`ConversationContext`]: a session is created lazily on the first
//! message and the handle is reused unchanged afterward. A single failed
//! turn never invalidates the handle. When the conversational backend is
//! unavailable the conversation continues indefinitely in offline mode
//! against a locally generated handle.

use crate::invoker::Invoker;
use crate::models::{ChatReply, ConversationContext};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

pub struct SessionManager {
    invoker: Arc<Invoker>,
}

impl SessionManager {
    pub fn new(invoker: Arc<Invoker>) -> Self {
        Self { invoker }
    }

    /// Send one chat turn. Always returns a reply with an active context —
    /// a session handle exists after the first call, remote or offline.
    pub async fn send_message(&self, message: &str, context: ConversationContext) -> ChatReply {
        let Some(client) = self.invoker.conversational() else {
            return ChatReply {
                text: self.invoker.catalog().conversational_reply(),
                context: ensure_offline_handle(context),
            };
        };

        // Lazily establish a remote session on the first message.
        let handle = match context.session_handle {
            Some(handle) => handle,
            None => match client.create_session().await {
                Ok(handle) => handle,
                Err(error) => {
                    warn!(
                        error = %error,
                        "Session creation failed, continuing with an offline session"
                    );
                    return ChatReply {
                        text: self.invoker.catalog().conversational_reply(),
                        context: ConversationContext::with_handle(offline_handle()),
                    };
                }
            },
        };

        let context = ConversationContext::with_handle(handle.clone());

        match client.send_message(&handle, message).await {
            Ok(text) => ChatReply { text, context },
            Err(error) => {
                // Handle stays valid; only this turn degrades.
                warn!(
                    error = %error,
                    "Chat turn failed, degrading to synthetic reply"
                );
                ChatReply {
                    text: self.invoker.catalog().conversational_reply(),
                    context,
                }
            }
        }
    }
}

fn offline_handle() -> String {
    format!("offline-{}", Uuid::new_v4())
}

fn ensure_offline_handle(context: ConversationContext) -> ConversationContext {
    if context.is_active() {
        context
    } else {
        ConversationContext::with_handle(offline_handle())
    }
}
