//! Courtroom role types.
//!
//! Roles arrive at the system boundary as raw strings (API payloads,
//! generated directives). They are normalized into these enums exactly
//! once; all comparisons elsewhere are on the enum values.

use crate::error::{MootError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The role a human participant can choose when starting a trial.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    Defense,
    Prosecutor,
}

/// All roles that can act during a trial.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CourtRole {
    Defense,
    Prosecutor,
    Judge,
    Jury,
    Witness,
}

impl CourtRole {
    /// Parses a raw role string, failing with `InvalidRole` on
    /// unrecognized input. Matching is case-insensitive.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .parse()
            .map_err(|_| MootError::InvalidRole(raw.to_string()))
    }

    /// Title-case label used as the transcript speaker name.
    pub fn speaker_name(&self) -> &'static str {
        match self {
            CourtRole::Defense => "Defense",
            CourtRole::Prosecutor => "Prosecutor",
            CourtRole::Judge => "Judge",
            CourtRole::Jury => "Jury",
            CourtRole::Witness => "Witness",
        }
    }
}

impl From<UserRole> for CourtRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Defense => CourtRole::Defense,
            UserRole::Prosecutor => CourtRole::Prosecutor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(CourtRole::parse("Judge").unwrap(), CourtRole::Judge);
        assert_eq!(CourtRole::parse("PROSECUTOR").unwrap(), CourtRole::Prosecutor);
        assert_eq!(CourtRole::parse(" defense ").unwrap(), CourtRole::Defense);
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        let err = CourtRole::parse("bailiff").unwrap_err();
        assert!(matches!(err, MootError::InvalidRole(_)));
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(CourtRole::Prosecutor.to_string(), "prosecutor");
        assert_eq!(UserRole::Defense.to_string(), "defense");
    }

    #[test]
    fn user_role_maps_onto_court_role() {
        assert_eq!(CourtRole::from(UserRole::Defense), CourtRole::Defense);
        assert_eq!(CourtRole::from(UserRole::Prosecutor), CourtRole::Prosecutor);
    }
}
