//! Text generation backends.
//!
//! A backend turns a fully assembled prompt into plain text. Agents are
//! backend-agnostic; the same courtroom agent works against the OpenAI
//! API in production and against a scripted queue in tests.

use async_trait::async_trait;
use moot_core::{MootError, Result};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// A source of generated text.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Generates a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `MootError::Generation` when the backend cannot produce
    /// text. Callers above the orchestrator never see this error; the
    /// orchestrator recovers it into a fallback reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// A backend that replays a fixed queue of responses.
///
/// Used by tests and offline runs. Once the queue is exhausted, further
/// calls fail with a generation error, which exercises the
/// orchestrator's fallback path.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedBackend {
    /// Creates a backend that will answer with `replies` in order.
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a backend with no queued replies; every call fails.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }
}

#[async_trait]
impl TextBackend for ScriptedBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| MootError::generation("scripted backend has no queued replies"))
    }
}
