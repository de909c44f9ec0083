//! Phase state machine.
//!
//! Enforces the single legal path through trial phases. Validation
//! happens before any write: on failure the session is left completely
//! unchanged.

use crate::error::{MootError, Result};
use crate::phase::TrialPhase;
use crate::session::TrialSession;
use crate::turn;
use std::collections::HashMap;

/// Speaker label for system-generated transcript entries.
pub const COURT_CLERK: &str = "Court Clerk";

/// Advances the trial to `requested`.
///
/// Fails with `InvalidTransition` when `requested` is not the unique
/// successor of the current phase. On success a system transcript entry
/// describing the transition is appended, the phase is set, and turn
/// state is reinitialized for the new phase.
pub fn advance_phase(session: &mut TrialSession, requested: TrialPhase) -> Result<()> {
    let from = session.current_phase;
    if from.successor() != Some(requested) {
        return Err(MootError::InvalidTransition { from, requested });
    }

    session.append_entry(
        COURT_CLERK,
        format!("The trial moves from {} to {}.", from, requested),
        HashMap::new(),
    );
    session.current_phase = requested;
    turn::initialize_turn(session);

    Ok(())
}
