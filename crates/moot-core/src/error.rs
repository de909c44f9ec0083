//! Error types for the Moot trial engine.

use crate::phase::TrialPhase;
use crate::role::CourtRole;
use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire Moot engine.
///
/// Validation errors (`NotFound`, `InvalidTransition`, turn violations,
/// `InvalidRole`) are surfaced to the caller and guarantee that no
/// session state was written. `Generation` never crosses the
/// orchestrator boundary; it is recovered into a fallback reply.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum MootError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Requested phase is not the unique successor of the current phase
    #[error("Illegal phase transition: '{from}' cannot advance to '{requested}'")]
    InvalidTransition {
        from: TrialPhase,
        requested: TrialPhase,
    },

    /// The human player's own turn is pending; an agent may not act
    #[error("It is your turn to speak as '{role}'")]
    OwnTurnPending { role: CourtRole },

    /// A different role holds the current turn
    #[error("It is not '{role}'s turn to speak")]
    NotYourTurn {
        role: CourtRole,
        current: Option<CourtRole>,
    },

    /// Unrecognized role string at the system boundary
    #[error("Unrecognized role: '{0}'")]
    InvalidRole(String),

    /// Content-generation call errored (recovered internally)
    #[error("Content generation failed: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MootError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a turn authorization failure of either kind
    pub fn is_turn_violation(&self) -> bool {
        matches!(self, Self::OwnTurnPending { .. } | Self::NotYourTurn { .. })
    }

    /// Check if this is an illegal phase transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

/// A type alias for `Result<T, MootError>`.
pub type Result<T> = std::result::Result<T, MootError>;
