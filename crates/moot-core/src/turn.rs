//! Turn coordination for trial sessions.
//!
//! The coordinator is a pure rule engine: given the current phase and
//! the role that spoke last within that phase, it computes who speaks
//! next, and it authorizes or denies action requests. All turn-state
//! mutation after an accepted turn goes through [`record_turn`] so the
//! transition logic lives in exactly one place.

use crate::phase::TrialPhase;
use crate::role::CourtRole;
use crate::session::TrialSession;

/// Computes who speaks next for a given phase and last speaker.
///
/// `None` means the phase is exhausted (or terminal) and an explicit
/// phase advance is required before anyone may act again.
pub fn next_turn(phase: TrialPhase, last_speaker: Option<CourtRole>) -> Option<CourtRole> {
    match phase {
        // Judge opens the proceedings, then hands off to the
        // prosecutor to begin opening statements.
        TrialPhase::Setup => match last_speaker {
            Some(CourtRole::Judge) => Some(CourtRole::Prosecutor),
            _ => Some(CourtRole::Judge),
        },
        TrialPhase::OpeningStatements | TrialPhase::ClosingArguments => match last_speaker {
            None => Some(CourtRole::Prosecutor),
            Some(CourtRole::Prosecutor) => Some(CourtRole::Defense),
            // Both sides have spoken; the phase is exhausted.
            Some(_) => None,
        },
        // Examination alternates between the two sides with no natural
        // end; an explicit phase advance exits it. A judge or witness
        // interjection hands the floor back to the prosecutor.
        TrialPhase::WitnessExamination => match last_speaker {
            Some(CourtRole::Prosecutor) => Some(CourtRole::Defense),
            _ => Some(CourtRole::Prosecutor),
        },
        TrialPhase::JuryDeliberation => Some(CourtRole::Jury),
        TrialPhase::Verdict => Some(CourtRole::Judge),
        TrialPhase::Completed => None,
    }
}

/// Checks whether `role` is authorized to act right now.
///
/// The judge may always interject to maintain order. Every other role
/// is allowed only when it holds the current turn; in particular the
/// role bound to the human player is denied unless it is also the
/// computed turn.
pub fn should_respond(session: &TrialSession, role: CourtRole) -> bool {
    if role == CourtRole::Judge {
        return true;
    }
    session.current_turn == Some(role)
}

/// Applies the turn-state update after an accepted action by `speaker`.
///
/// `directed` carries a parsed turn directive from the speaker's
/// output, if any; it overrides the rule table only when the speaker
/// was the judge.
pub fn record_turn(session: &mut TrialSession, speaker: CourtRole, directed: Option<CourtRole>) {
    session.last_speaker = Some(speaker);
    session.turn_count += 1;

    let next = match directed {
        Some(role) if speaker == CourtRole::Judge => Some(role),
        _ => next_turn(session.current_phase, Some(speaker)),
    };
    session.current_turn = next;
    session.awaiting_response = next.is_some();
}

/// Resets turn state for a freshly entered phase and computes the
/// phase's first turn.
pub fn initialize_turn(session: &mut TrialSession) {
    session.last_speaker = None;
    session.turn_count = 0;
    session.current_turn = next_turn(session.current_phase, None);
    session.awaiting_response = session.current_turn.is_some();
}

/// Whether the human player holds the current turn.
pub fn can_user_speak_now(session: &TrialSession) -> bool {
    session.current_turn == Some(session.user_court_role())
}

/// The AI roles the human player can interact with right now.
///
/// Always the judge, the jury, and opposing counsel; witnesses become
/// available during witness examination.
pub fn available_agents_for_user(session: &TrialSession) -> Vec<CourtRole> {
    let mut agents = vec![CourtRole::Judge, CourtRole::Jury];

    match session.user_court_role() {
        CourtRole::Defense => agents.push(CourtRole::Prosecutor),
        _ => agents.push(CourtRole::Defense),
    }

    if session.current_phase == TrialPhase::WitnessExamination {
        agents.push(CourtRole::Witness);
    }

    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::UserRole;
    use uuid::Uuid;

    fn session(user_role: UserRole) -> TrialSession {
        let mut session = TrialSession::new(Uuid::new_v4(), user_role, Vec::new());
        initialize_turn(&mut session);
        session
    }

    #[test]
    fn setup_starts_with_the_judge() {
        assert_eq!(
            next_turn(TrialPhase::Setup, None),
            Some(CourtRole::Judge)
        );
        assert_eq!(
            next_turn(TrialPhase::Setup, Some(CourtRole::Judge)),
            Some(CourtRole::Prosecutor)
        );
    }

    #[test]
    fn opening_statements_run_prosecutor_then_defense_then_none() {
        let phase = TrialPhase::OpeningStatements;
        assert_eq!(next_turn(phase, None), Some(CourtRole::Prosecutor));
        assert_eq!(
            next_turn(phase, Some(CourtRole::Prosecutor)),
            Some(CourtRole::Defense)
        );
        assert_eq!(next_turn(phase, Some(CourtRole::Defense)), None);
    }

    #[test]
    fn witness_examination_alternates_without_a_natural_end() {
        let phase = TrialPhase::WitnessExamination;
        let mut speaker = next_turn(phase, None);
        assert_eq!(speaker, Some(CourtRole::Prosecutor));
        for _ in 0..6 {
            let next = next_turn(phase, speaker);
            assert!(next.is_some());
            assert_ne!(next, speaker);
            speaker = next;
        }
        // An interjection hands the floor back to the prosecutor.
        assert_eq!(
            next_turn(phase, Some(CourtRole::Judge)),
            Some(CourtRole::Prosecutor)
        );
    }

    #[test]
    fn deliberation_and_verdict_repeat_one_role() {
        assert_eq!(
            next_turn(TrialPhase::JuryDeliberation, Some(CourtRole::Jury)),
            Some(CourtRole::Jury)
        );
        assert_eq!(
            next_turn(TrialPhase::Verdict, Some(CourtRole::Judge)),
            Some(CourtRole::Judge)
        );
        assert_eq!(next_turn(TrialPhase::Completed, None), None);
    }

    #[test]
    fn judge_may_always_respond() {
        let mut s = session(UserRole::Defense);
        s.current_turn = Some(CourtRole::Prosecutor);
        assert!(should_respond(&s, CourtRole::Judge));

        s.current_turn = None;
        assert!(should_respond(&s, CourtRole::Judge));
    }

    #[test]
    fn only_the_current_turn_holder_may_respond() {
        let mut s = session(UserRole::Defense);
        s.current_turn = Some(CourtRole::Prosecutor);
        assert!(should_respond(&s, CourtRole::Prosecutor));
        assert!(!should_respond(&s, CourtRole::Defense));
        assert!(!should_respond(&s, CourtRole::Jury));

        s.current_turn = None;
        assert!(!should_respond(&s, CourtRole::Prosecutor));
    }

    #[test]
    fn human_bound_role_is_denied_when_not_its_turn() {
        let mut s = session(UserRole::Defense);
        s.current_turn = Some(CourtRole::Defense);
        // The human's bound role holds the turn, so the request is
        // authorized for that role and no other non-judge role.
        assert!(should_respond(&s, CourtRole::Defense));
        assert!(!should_respond(&s, CourtRole::Prosecutor));
    }

    #[test]
    fn record_turn_advances_the_counter_and_recomputes_the_turn() {
        let mut s = session(UserRole::Defense);
        assert_eq!(s.current_turn, Some(CourtRole::Judge));

        record_turn(&mut s, CourtRole::Judge, None);
        assert_eq!(s.last_speaker, Some(CourtRole::Judge));
        assert_eq!(s.turn_count, 1);
        assert_eq!(s.current_turn, Some(CourtRole::Prosecutor));
        assert!(s.awaiting_response);
    }

    #[test]
    fn judge_directive_overrides_the_rule_table() {
        let mut s = session(UserRole::Defense);
        s.current_phase = TrialPhase::WitnessExamination;
        initialize_turn(&mut s);

        record_turn(&mut s, CourtRole::Judge, Some(CourtRole::Witness));
        assert_eq!(s.current_turn, Some(CourtRole::Witness));
        assert!(s.awaiting_response);
    }

    #[test]
    fn directive_from_a_non_judge_is_ignored() {
        let mut s = session(UserRole::Defense);
        s.current_phase = TrialPhase::OpeningStatements;
        initialize_turn(&mut s);

        record_turn(&mut s, CourtRole::Prosecutor, Some(CourtRole::Jury));
        assert_eq!(s.current_turn, Some(CourtRole::Defense));
    }

    #[test]
    fn phase_exhaustion_clears_awaiting_response() {
        let mut s = session(UserRole::Defense);
        s.current_phase = TrialPhase::OpeningStatements;
        initialize_turn(&mut s);

        record_turn(&mut s, CourtRole::Prosecutor, None);
        record_turn(&mut s, CourtRole::Defense, None);
        assert_eq!(s.current_turn, None);
        assert!(!s.awaiting_response);
        assert_eq!(s.turn_count, 2);
    }

    #[test]
    fn available_agents_track_user_role_and_phase() {
        let mut s = session(UserRole::Defense);
        assert_eq!(
            available_agents_for_user(&s),
            vec![CourtRole::Judge, CourtRole::Jury, CourtRole::Prosecutor]
        );

        s.current_phase = TrialPhase::WitnessExamination;
        assert!(available_agents_for_user(&s).contains(&CourtRole::Witness));

        let s = session(UserRole::Prosecutor);
        assert!(available_agents_for_user(&s).contains(&CourtRole::Defense));
    }
}
