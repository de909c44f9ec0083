//! Trial session orchestration.

use moot_core::case::Case;
use moot_core::directive;
use moot_core::machine::{self, COURT_CLERK};
use moot_core::repository::CaseRepository;
use moot_core::role::{CourtRole, UserRole};
use moot_core::session::{
    EvidenceRuling, Objection, ObjectionRuling, ObjectionType, Participant, TrialSession, Verdict,
};
use moot_core::turn;
use moot_core::{MootError, Result, TrialPhase};
use moot_infrastructure::GenerationSettings;
use moot_interaction::agent::AgentReply;
use moot_interaction::agents::prompts;
use moot_interaction::registry::{AgentRegistry, AgentSeed};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Reply substituted when generation fails or times out.
const FALLBACK_CONTENT: &str = "I apologize, but I'm having difficulty responding right now.";
const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Orchestrates trial sessions.
///
/// The service owns an explicit, concurrency-safe id-to-session map.
/// Operations on different sessions proceed fully in parallel; within
/// one session every mutating operation is serialized through the
/// per-session mutex, which is held across the whole
/// generate-then-record sequence so concurrent requests cannot
/// interleave their effects.
pub struct TrialService {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<TrialSession>>>>,
    case_repository: Arc<dyn CaseRepository>,
    registry: AgentRegistry,
    settings: GenerationSettings,
}

impl TrialService {
    /// Creates a new service.
    pub fn new(
        case_repository: Arc<dyn CaseRepository>,
        registry: AgentRegistry,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            case_repository,
            registry,
            settings,
        }
    }

    /// Creates a new trial session for `case_id` with the human playing
    /// `user_role`.
    ///
    /// Participants are fixed at creation: one human entry for the
    /// chosen role, AI entries for the judge, the jury, and opposing
    /// counsel, and one AI entry per witness in the case. The session
    /// starts in the setup phase with the judge holding the first turn.
    ///
    /// # Errors
    ///
    /// `NotFound` when the case does not exist.
    pub async fn create_session(&self, case_id: Uuid, user_role: UserRole) -> Result<TrialSession> {
        let case = self.resolve_case(&case_id).await?;

        let mut session = TrialSession::new(case_id, user_role, build_participants(user_role, &case));
        turn::initialize_turn(&mut session);

        info!(session_id = %session.id, case = %case.title, user_role = %user_role, "trial session created");

        let snapshot = session.clone();
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::new(Mutex::new(session)));

        Ok(snapshot)
    }

    /// Returns a snapshot of a session.
    pub async fn session(&self, session_id: &Uuid) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let session = handle.lock().await;
        Ok(session.clone())
    }

    /// Returns snapshots of all live sessions.
    pub async fn list_sessions(&self) -> Vec<TrialSession> {
        let handles: Vec<_> = self.sessions.read().await.values().cloned().collect();
        let mut sessions = Vec::with_capacity(handles.len());
        for handle in handles {
            sessions.push(handle.lock().await.clone());
        }
        sessions
    }

    /// Produces a response from the agent playing `role`.
    ///
    /// Authorization is checked before anything is written. The
    /// generation call runs under the configured deadline; on error or
    /// expiry a low-confidence fallback reply is recorded instead and
    /// the turn sequence still advances, so a flaky backend can never
    /// stall the trial. Any `TURN_MANAGEMENT` directive is stripped
    /// from the stored content and, when the speaker was the judge,
    /// overrides the computed next turn.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session or witness, `OwnTurnPending`
    /// when the human player's turn is due, `NotYourTurn` when a
    /// different role holds the turn. Generation failures are never
    /// surfaced.
    pub async fn respond(
        &self,
        session_id: &Uuid,
        role: CourtRole,
        prompt: &str,
        context: &HashMap<String, serde_json::Value>,
    ) -> Result<String> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        if !turn::should_respond(&session, role) {
            let current = session.current_turn;
            return Err(if current == Some(session.user_court_role()) {
                MootError::OwnTurnPending {
                    role: session.user_court_role(),
                }
            } else {
                MootError::NotYourTurn { role, current }
            });
        }

        let case = self.case_repository.find_by_id(&session.case_id).await?;
        let seed = AgentSeed {
            case: case.as_ref(),
            context,
        };
        let agent = self.registry.create(role, &seed)?;

        let deadline = Duration::from_secs(self.settings.timeout_secs);
        let reply = match tokio::time::timeout(
            deadline,
            agent.respond(prompt, &session, case.as_ref(), context),
        )
        .await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => {
                warn!(session_id = %session_id, %role, error = %err, "generation failed, substituting fallback");
                fallback_reply(role, err.to_string())
            }
            Err(_) => {
                warn!(session_id = %session_id, %role, "generation timed out, substituting fallback");
                fallback_reply(role, format!("generation exceeded {}s deadline", deadline.as_secs()))
            }
        };

        let parsed = directive::parse(&reply.content);

        let mut metadata = HashMap::from([
            (
                "confidence".to_string(),
                serde_json::json!(reply.confidence),
            ),
            (
                "metadata".to_string(),
                serde_json::json!(reply.metadata),
            ),
        ]);
        if let Some(directed) = parsed.directed {
            metadata.insert("directive".to_string(), serde_json::json!(directed));
        }

        session.append_entry(role.speaker_name(), parsed.content.clone(), metadata);
        turn::record_turn(&mut session, role, parsed.directed);

        debug!(
            session_id = %session_id,
            speaker = %role,
            next_turn = ?session.current_turn,
            turn_count = session.turn_count,
            "turn recorded"
        );

        Ok(parsed.content)
    }

    /// Advances the trial to `requested`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidTransition` when
    /// `requested` is not the successor of the current phase; the
    /// session is untouched on failure.
    pub async fn advance_phase(
        &self,
        session_id: &Uuid,
        requested: TrialPhase,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        machine::advance_phase(&mut session, requested)?;
        info!(session_id = %session_id, phase = %requested, "trial phase advanced");

        Ok(session.clone())
    }

    /// Asks the jury to deliberate and render its verdict.
    ///
    /// Shapes the deliberation instruction from the case record and the
    /// session's admitted evidence, using the judge's most recent
    /// statement as the jury instructions, then runs it through the
    /// normal response path. The jury must hold the current turn.
    pub async fn request_deliberation(&self, session_id: &Uuid) -> Result<String> {
        let session = self.session(session_id).await?;
        let case = self.resolve_case(&session.case_id).await?;

        let instructions = session
            .transcript
            .iter()
            .rev()
            .find(|entry| entry.speaker == CourtRole::Judge.speaker_name())
            .map(|entry| entry.content.clone())
            .unwrap_or_else(|| {
                "Apply the burden of proof: guilt must be proven beyond a reasonable doubt."
                    .to_string()
            });

        // Admitted entries are keyed by evidence title; resolve them
        // back to the case record so the jury sees the descriptions,
        // not bare keys.
        let key_evidence: Vec<String> = session
            .evidence_admitted
            .iter()
            .map(|id| {
                case.evidence
                    .iter()
                    .find(|item| item.title == *id)
                    .map(|item| format!("{}: {}", item.title, item.description))
                    .unwrap_or_else(|| id.clone())
            })
            .collect();

        let prompt = prompts::deliberation(
            &case.charges,
            &case.prosecution_theory,
            &case.defense_theory,
            &key_evidence,
            &instructions,
        );

        self.respond(session_id, CourtRole::Jury, &prompt, &HashMap::new())
            .await
    }

    /// Records an evidence submission.
    ///
    /// Bookkeeping only: always permitted regardless of whose turn it
    /// is, and admission state is not touched until the judge rules.
    pub async fn submit_evidence(
        &self,
        session_id: &Uuid,
        evidence_id: &str,
        submitted_by: CourtRole,
        description: &str,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        session.append_entry(
            submitted_by.speaker_name(),
            format!("Submits evidence for admission: {description}"),
            HashMap::from([
                ("action".to_string(), serde_json::json!("submit_evidence")),
                ("evidence_id".to_string(), serde_json::json!(evidence_id)),
            ]),
        );

        Ok(session.clone())
    }

    /// Records the judge's ruling on submitted evidence.
    ///
    /// An `admitted` ruling idempotently adds the evidence id to the
    /// session's admitted set; a `rejected` ruling is record-only.
    pub async fn rule_on_evidence(
        &self,
        session_id: &Uuid,
        evidence_id: &str,
        ruling: EvidenceRuling,
        reason: &str,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        session.append_entry(
            CourtRole::Judge.speaker_name(),
            format!("The evidence is {ruling}. {reason}"),
            HashMap::from([
                ("action".to_string(), serde_json::json!("rule_on_evidence")),
                ("evidence_id".to_string(), serde_json::json!(evidence_id)),
                ("ruling".to_string(), serde_json::json!(ruling)),
            ]),
        );

        if ruling == EvidenceRuling::Admitted {
            session.admit_evidence(evidence_id);
        }

        Ok(session.clone())
    }

    /// Records a raised objection.
    pub async fn raise_objection(
        &self,
        session_id: &Uuid,
        objection_type: ObjectionType,
        raised_by: CourtRole,
        reason: &str,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        session.append_entry(
            raised_by.speaker_name(),
            format!("Objection! {objection_type}: {reason}"),
            HashMap::from([
                ("action".to_string(), serde_json::json!("raise_objection")),
                ("objection_type".to_string(), serde_json::json!(objection_type)),
            ]),
        );
        session.objections.push(Objection {
            objection_type,
            raised_by,
            reason: reason.to_string(),
            ruling: None,
            context: String::new(),
        });

        Ok(session.clone())
    }

    /// Records the judge's ruling on an objection.
    ///
    /// The ruling text itself is the record; no other state changes.
    pub async fn rule_on_objection(
        &self,
        session_id: &Uuid,
        objection_id: &str,
        ruling: ObjectionRuling,
        reason: &str,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        session.append_entry(
            CourtRole::Judge.speaker_name(),
            format!("{ruling}. {reason}"),
            HashMap::from([
                ("action".to_string(), serde_json::json!("rule_on_objection")),
                ("objection_id".to_string(), serde_json::json!(objection_id)),
                ("ruling".to_string(), serde_json::json!(ruling)),
            ]),
        );

        Ok(session.clone())
    }

    /// Completes the trial with a verdict.
    ///
    /// Uses the terminal shortcut: the phase is forced to `Completed`
    /// from any phase, bypassing the single-step transition check.
    pub async fn complete_trial(
        &self,
        session_id: &Uuid,
        verdict: Verdict,
    ) -> Result<TrialSession> {
        let handle = self.session_handle(session_id).await?;
        let mut session = handle.lock().await;

        session.complete(verdict);
        let verdict_text = session
            .verdict
            .as_ref()
            .map(|v| v.verdict.clone())
            .unwrap_or_default();
        session.append_entry(
            COURT_CLERK,
            format!("The trial is complete. Verdict: {verdict_text}"),
            HashMap::from([("action".to_string(), serde_json::json!("complete_trial"))]),
        );

        info!(session_id = %session_id, verdict = %verdict_text, "trial completed");

        Ok(session.clone())
    }

    async fn session_handle(&self, session_id: &Uuid) -> Result<Arc<Mutex<TrialSession>>> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| MootError::not_found("session", session_id.to_string()))
    }

    async fn resolve_case(&self, case_id: &Uuid) -> Result<Case> {
        self.case_repository
            .find_by_id(case_id)
            .await?
            .ok_or_else(|| MootError::not_found("case", case_id.to_string()))
    }
}

fn build_participants(user_role: UserRole, case: &Case) -> Vec<Participant> {
    let mut participants = vec![
        Participant {
            name: "User".to_string(),
            role: user_role.into(),
            is_ai: false,
            description: None,
        },
        Participant {
            name: "Judge".to_string(),
            role: CourtRole::Judge,
            is_ai: true,
            description: Some("Presiding judge for the trial".to_string()),
        },
        Participant {
            name: "Jury".to_string(),
            role: CourtRole::Jury,
            is_ai: true,
            description: Some("12-person jury".to_string()),
        },
    ];

    // Opposing counsel takes whichever side the human did not.
    participants.push(match user_role {
        UserRole::Defense => Participant {
            name: "Prosecutor".to_string(),
            role: CourtRole::Prosecutor,
            is_ai: true,
            description: Some("State prosecutor".to_string()),
        },
        UserRole::Prosecutor => Participant {
            name: "Defense Attorney".to_string(),
            role: CourtRole::Defense,
            is_ai: true,
            description: Some("Defense counsel".to_string()),
        },
    });

    for witness in &case.witnesses {
        participants.push(Participant {
            name: witness.name.clone(),
            role: CourtRole::Witness,
            is_ai: true,
            description: Some(format!("Witness: {}", witness.background)),
        });
    }

    participants
}

fn fallback_reply(role: CourtRole, error: String) -> AgentReply {
    AgentReply {
        content: FALLBACK_CONTENT.to_string(),
        role,
        confidence: FALLBACK_CONFIDENCE,
        metadata: HashMap::from([("error".to_string(), serde_json::json!(error))]),
    }
}
