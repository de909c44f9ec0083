//! Courtroom agents.
//!
//! Each agent is a [`PromptAgent`]: a role-conditioned system prompt
//! wrapped around a [`TextBackend`]. The judge, counsel, and jury
//! prompts are static; witness agents are built per witness from the
//! case record.

pub mod prompts;

use crate::agent::{build_case_context, AgentReply, CourtAgent};
use crate::backend::TextBackend;
use async_trait::async_trait;
use moot_core::case::{Case, Witness};
use moot_core::role::CourtRole;
use moot_core::session::TrialSession;
use moot_core::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Default confidence attached to successful replies.
const DEFAULT_CONFIDENCE: f64 = 0.8;

/// A courtroom agent defined by a role, a system prompt, and a backend.
pub struct PromptAgent {
    role: CourtRole,
    system_prompt: String,
    backend: Arc<dyn TextBackend>,
    /// Extra metadata stamped onto every reply (e.g. the witness name).
    metadata: HashMap<String, serde_json::Value>,
}

impl PromptAgent {
    pub fn new(
        role: CourtRole,
        system_prompt: impl Into<String>,
        backend: Arc<dyn TextBackend>,
    ) -> Self {
        Self {
            role,
            system_prompt: system_prompt.into(),
            backend,
            metadata: HashMap::new(),
        }
    }

    /// The presiding judge.
    pub fn judge(backend: Arc<dyn TextBackend>) -> Self {
        Self::new(CourtRole::Judge, prompts::JUDGE, backend)
    }

    /// The prosecuting attorney.
    pub fn prosecutor(backend: Arc<dyn TextBackend>) -> Self {
        Self::new(CourtRole::Prosecutor, prompts::PROSECUTOR, backend)
    }

    /// The defense attorney.
    pub fn defense(backend: Arc<dyn TextBackend>) -> Self {
        Self::new(CourtRole::Defense, prompts::DEFENSE, backend)
    }

    /// The deliberating jury.
    pub fn jury(backend: Arc<dyn TextBackend>) -> Self {
        Self::new(CourtRole::Jury, prompts::JURY, backend)
    }

    /// A testifying witness, conditioned on the case's witness record.
    pub fn for_witness(witness: &Witness, backend: Arc<dyn TextBackend>) -> Self {
        let mut agent = Self::new(CourtRole::Witness, prompts::witness(witness), backend);
        agent.metadata.insert(
            "witness_name".to_string(),
            serde_json::Value::String(witness.name.clone()),
        );
        agent
    }
}

#[async_trait]
impl CourtAgent for PromptAgent {
    fn role(&self) -> CourtRole {
        self.role
    }

    async fn respond(
        &self,
        prompt: &str,
        session: &TrialSession,
        case: Option<&Case>,
        _context: &HashMap<String, serde_json::Value>,
    ) -> Result<AgentReply> {
        let case_context = build_case_context(session, case);
        let full_prompt = format!(
            "{}\n\n# Trial Context\n{}\n\n# Instruction\n{}",
            self.system_prompt, case_context, prompt
        );

        let content = self.backend.generate(&full_prompt).await?;

        let mut metadata = self.metadata.clone();
        metadata.insert(
            "trial_phase".to_string(),
            serde_json::Value::String(session.current_phase.to_string()),
        );

        Ok(AgentReply {
            content,
            role: self.role,
            confidence: DEFAULT_CONFIDENCE,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;
    use moot_core::role::UserRole;
    use uuid::Uuid;

    fn witness_record() -> Witness {
        Witness {
            name: "Sarah Martinez".to_string(),
            background: "Store clerk for six years.".to_string(),
            knowledge: "Saw the robbery from behind the counter.".to_string(),
            bias: None,
            called_by: CourtRole::Prosecutor,
        }
    }

    #[tokio::test]
    async fn agents_carry_their_role_and_phase_metadata() {
        let backend = Arc::new(ScriptedBackend::new(["May it please the court."]));
        let agent = PromptAgent::prosecutor(backend);
        let session = TrialSession::new(Uuid::new_v4(), UserRole::Defense, Vec::new());

        let reply = agent
            .respond("Deliver your opening statement.", &session, None, &HashMap::new())
            .await
            .unwrap();

        assert_eq!(reply.role, CourtRole::Prosecutor);
        assert_eq!(reply.content, "May it please the court.");
        assert_eq!(
            reply.metadata.get("trial_phase").and_then(|v| v.as_str()),
            Some("setup")
        );
    }

    #[tokio::test]
    async fn witness_agents_are_conditioned_on_the_witness_record() {
        let backend = Arc::new(ScriptedBackend::new(["I saw him clearly."]));
        let agent = PromptAgent::for_witness(&witness_record(), backend);
        let session = TrialSession::new(Uuid::new_v4(), UserRole::Prosecutor, Vec::new());

        let reply = agent
            .respond("What did you see?", &session, None, &HashMap::new())
            .await
            .unwrap();

        assert_eq!(reply.role, CourtRole::Witness);
        assert_eq!(
            reply.metadata.get("witness_name").and_then(|v| v.as_str()),
            Some("Sarah Martinez")
        );
    }

    #[tokio::test]
    async fn backend_failures_propagate_to_the_caller() {
        let agent = PromptAgent::judge(Arc::new(ScriptedBackend::empty()));
        let session = TrialSession::new(Uuid::new_v4(), UserRole::Defense, Vec::new());

        let err = agent
            .respond("Open the proceedings.", &session, None, &HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, moot_core::MootError::Generation(_)));
    }
}
