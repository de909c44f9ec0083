pub mod case;
pub mod directive;
pub mod error;
pub mod machine;
pub mod phase;
pub mod repository;
pub mod role;
pub mod session;
pub mod turn;

// Re-export common error type
pub use error::{MootError, Result};
pub use phase::TrialPhase;
pub use role::{CourtRole, UserRole};
