//! The courtroom agent contract.

use async_trait::async_trait;
use moot_core::case::Case;
use moot_core::role::CourtRole;
use moot_core::session::TrialSession;
use moot_core::Result;
use std::collections::HashMap;

/// Number of trailing transcript entries included in agent context.
const TRANSCRIPT_WINDOW: usize = 5;

/// A reply produced by a courtroom agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    /// The agent's response content
    pub content: String,
    /// The agent's role
    pub role: CourtRole,
    /// Confidence in the response, in `[0.0, 1.0]`
    pub confidence: f64,
    /// Additional metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A role-conditioned participant capable of producing responses.
///
/// The contract mirrors the external generation capability: given a
/// prompt and a session snapshot, produce text with a confidence score
/// and metadata. Internal reasoning quality is out of scope; only this
/// input/output shape matters to the orchestrator.
#[async_trait]
pub trait CourtAgent: Send + Sync {
    /// The role this agent plays in the trial.
    fn role(&self) -> CourtRole;

    /// Generates a response to `prompt` in the context of the session.
    async fn respond(
        &self,
        prompt: &str,
        session: &TrialSession,
        case: Option<&Case>,
        context: &HashMap<String, serde_json::Value>,
    ) -> Result<AgentReply>;
}

impl std::fmt::Debug for dyn CourtAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourtAgent")
            .field("role", &self.role())
            .finish()
    }
}

/// Builds the shared context block every agent sees: current phase,
/// the human's chosen role, case facts when available, and a bounded
/// window of recent transcript entries.
pub fn build_case_context(session: &TrialSession, case: Option<&Case>) -> String {
    let mut parts = vec![
        format!("Trial Phase: {}", session.current_phase),
        format!("User Role: {}", session.user_role),
    ];

    if let Some(case) = case {
        parts.push(format!("Case: {}", case.title));
        parts.push(format!("Charges: {}", case.charges.join(", ")));
        parts.push(format!("Case Description: {}", case.description));
    }

    if !session.transcript.is_empty() {
        parts.push("Recent Transcript:".to_string());
        let window = session
            .transcript
            .len()
            .saturating_sub(TRANSCRIPT_WINDOW);
        for entry in &session.transcript[window..] {
            parts.push(format!("{}: {}", entry.speaker, entry.content));
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use moot_core::role::UserRole;
    use uuid::Uuid;

    #[test]
    fn context_includes_phase_and_user_role() {
        let session = TrialSession::new(Uuid::new_v4(), UserRole::Prosecutor, Vec::new());
        let context = build_case_context(&session, None);
        assert!(context.contains("Trial Phase: setup"));
        assert!(context.contains("User Role: prosecutor"));
        assert!(!context.contains("Recent Transcript"));
    }

    #[test]
    fn context_windows_the_transcript() {
        let mut session = TrialSession::new(Uuid::new_v4(), UserRole::Defense, Vec::new());
        for i in 0..8 {
            session.append_entry("Judge", format!("statement {i}"), HashMap::new());
        }

        let context = build_case_context(&session, None);
        assert!(!context.contains("statement 2"));
        assert!(context.contains("statement 3"));
        assert!(context.contains("statement 7"));
    }
}
