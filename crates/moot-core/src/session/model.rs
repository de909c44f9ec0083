//! Trial session domain model.
//!
//! A `TrialSession` is the unit of simulation state. It is created when
//! a trial starts, mutated exclusively through orchestrator operations,
//! and discarded on process termination; there is no persistence.

use crate::phase::TrialPhase;
use crate::role::{CourtRole, UserRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// A participant in the trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Name of the participant
    pub name: String,
    /// Role in the trial
    pub role: CourtRole,
    /// Whether this participant is AI-controlled
    pub is_ai: bool,
    /// Description of the participant
    pub description: Option<String>,
}

/// Types of legal objections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectionType {
    Hearsay,
    Leading,
    Relevance,
    Speculation,
    Argumentative,
    AskedAndAnswered,
    Compound,
    AssumesFacts,
}

/// Ruling on submitted evidence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EvidenceRuling {
    Admitted,
    Rejected,
}

/// Ruling on a raised objection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectionRuling {
    Sustained,
    Overruled,
}

/// An objection raised during the trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    /// Type of objection
    pub objection_type: ObjectionType,
    /// Who raised the objection
    pub raised_by: CourtRole,
    /// Reason for the objection
    pub reason: String,
    /// Judge's ruling (sustained/overruled), once made
    pub ruling: Option<String>,
    /// Context where the objection was raised
    #[serde(default)]
    pub context: String,
}

/// Jury verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Guilty or Not Guilty
    pub verdict: String,
    /// Jury's reasoning for the verdict
    pub reasoning: String,
    /// Vote breakdown if available
    pub vote_breakdown: Option<HashMap<String, u32>>,
}

/// One immutable, ordered record of an action in the trial.
///
/// Entries are append-only; they are never mutated or reordered once
/// appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who is speaking
    pub speaker: String,
    /// What was said
    pub content: String,
    /// Phase the trial was in when this was recorded
    pub phase: TrialPhase,
    /// Timestamp when the entry was recorded (ISO 8601 format)
    pub timestamp: String,
    /// Additional metadata (confidence, raw backend metadata, parsed
    /// directive, ...)
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A complete trial session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSession {
    /// Unique session ID
    pub id: Uuid,
    /// ID of the case being tried
    pub case_id: Uuid,
    /// Role chosen by the human player
    pub user_role: UserRole,
    /// Current phase of the trial
    pub current_phase: TrialPhase,
    /// All participants, fixed at creation
    pub participants: Vec<Participant>,
    /// Append-only trial transcript
    #[serde(default)]
    pub transcript: Vec<TranscriptEntry>,
    /// IDs of admitted evidence; grows monotonically, add is idempotent
    #[serde(default)]
    pub evidence_admitted: Vec<String>,
    /// Objections raised
    #[serde(default)]
    pub objections: Vec<Objection>,
    /// Final verdict, set exactly once by trial completion
    pub verdict: Option<Verdict>,
    /// Trial start time (ISO 8601 format)
    pub started_at: String,
    /// Trial completion time (ISO 8601 format)
    pub completed_at: Option<String>,
    /// Who should speak next
    pub current_turn: Option<CourtRole>,
    /// Number of accepted turns taken in the current phase
    #[serde(default)]
    pub turn_count: u32,
    /// Who spoke last in the current phase
    pub last_speaker: Option<CourtRole>,
    /// Whether the system is waiting for a response
    #[serde(default)]
    pub awaiting_response: bool,
}

impl TrialSession {
    /// Creates a fresh session in the `Setup` phase.
    ///
    /// Turn state starts empty; the orchestrator initializes the first
    /// turn through the turn coordinator immediately after creation.
    pub fn new(case_id: Uuid, user_role: UserRole, participants: Vec<Participant>) -> Self {
        Self {
            id: Uuid::new_v4(),
            case_id,
            user_role,
            current_phase: TrialPhase::Setup,
            participants,
            transcript: Vec::new(),
            evidence_admitted: Vec::new(),
            objections: Vec::new(),
            verdict: None,
            started_at: chrono::Utc::now().to_rfc3339(),
            completed_at: None,
            current_turn: None,
            turn_count: 0,
            last_speaker: None,
            awaiting_response: false,
        }
    }

    /// Appends a transcript entry tagged with the current phase.
    pub fn append_entry(
        &mut self,
        speaker: impl Into<String>,
        content: impl Into<String>,
        metadata: HashMap<String, serde_json::Value>,
    ) {
        self.transcript.push(TranscriptEntry {
            speaker: speaker.into(),
            content: content.into(),
            phase: self.current_phase,
            timestamp: chrono::Utc::now().to_rfc3339(),
            metadata,
        });
    }

    /// Idempotently adds an evidence id to the admitted set.
    ///
    /// Returns `true` if the id was newly admitted.
    pub fn admit_evidence(&mut self, evidence_id: &str) -> bool {
        if self.evidence_admitted.iter().any(|id| id == evidence_id) {
            return false;
        }
        self.evidence_admitted.push(evidence_id.to_string());
        true
    }

    /// The courtroom role bound to the human player.
    pub fn user_court_role(&self) -> CourtRole {
        self.user_role.into()
    }

    /// Completes the trial with a verdict.
    ///
    /// This is the explicit terminal shortcut: it forces the phase to
    /// `Completed` from any phase, bypassing the single-step transition
    /// check, and stamps the completion time. The verdict is only
    /// written if none was recorded before.
    pub fn complete(&mut self, verdict: Verdict) {
        if self.verdict.is_none() {
            self.verdict = Some(verdict);
        }
        self.current_phase = TrialPhase::Completed;
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        self.current_turn = None;
        self.last_speaker = None;
        self.awaiting_response = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TrialSession {
        TrialSession::new(Uuid::new_v4(), UserRole::Defense, Vec::new())
    }

    #[test]
    fn new_session_starts_in_setup() {
        let session = session();
        assert_eq!(session.current_phase, TrialPhase::Setup);
        assert!(session.transcript.is_empty());
        assert_eq!(session.turn_count, 0);
        assert!(session.verdict.is_none());
        assert!(session.completed_at.is_none());
    }

    #[test]
    fn admit_evidence_is_idempotent() {
        let mut session = session();
        assert!(session.admit_evidence("exhibit-a"));
        assert!(!session.admit_evidence("exhibit-a"));
        assert_eq!(session.evidence_admitted, vec!["exhibit-a".to_string()]);
    }

    #[test]
    fn entries_are_tagged_with_the_current_phase() {
        let mut session = session();
        session.append_entry("Court Clerk", "All rise.", HashMap::new());
        session.current_phase = TrialPhase::OpeningStatements;
        session.append_entry("Prosecutor", "May it please the court.", HashMap::new());

        assert_eq!(session.transcript[0].phase, TrialPhase::Setup);
        assert_eq!(session.transcript[1].phase, TrialPhase::OpeningStatements);
    }

    #[test]
    fn complete_sets_verdict_exactly_once() {
        let mut session = session();
        session.complete(Verdict {
            verdict: "Not Guilty".to_string(),
            reasoning: "Reasonable doubt.".to_string(),
            vote_breakdown: None,
        });
        session.complete(Verdict {
            verdict: "Guilty".to_string(),
            reasoning: "Second attempt.".to_string(),
            vote_breakdown: None,
        });

        assert_eq!(session.current_phase, TrialPhase::Completed);
        assert_eq!(session.verdict.as_ref().unwrap().verdict, "Not Guilty");
        assert!(session.completed_at.is_some());
        assert!(!session.awaiting_response);
    }
}
