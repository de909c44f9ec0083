//! Trial phase states.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One stage of the fixed trial sequence.
///
/// Phases form a single directed path; each phase has exactly one legal
/// successor except `Completed`, which is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrialPhase {
    Setup,
    OpeningStatements,
    WitnessExamination,
    ClosingArguments,
    JuryDeliberation,
    Verdict,
    Completed,
}

impl TrialPhase {
    /// Returns the unique legal successor of this phase, or `None` for
    /// the terminal `Completed` phase.
    pub fn successor(&self) -> Option<TrialPhase> {
        match self {
            TrialPhase::Setup => Some(TrialPhase::OpeningStatements),
            TrialPhase::OpeningStatements => Some(TrialPhase::WitnessExamination),
            TrialPhase::WitnessExamination => Some(TrialPhase::ClosingArguments),
            TrialPhase::ClosingArguments => Some(TrialPhase::JuryDeliberation),
            TrialPhase::JuryDeliberation => Some(TrialPhase::Verdict),
            TrialPhase::Verdict => Some(TrialPhase::Completed),
            TrialPhase::Completed => None,
        }
    }

    /// Whether this phase ends the trial.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrialPhase::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn successors_form_a_single_path() {
        let mut phase = TrialPhase::Setup;
        let mut visited = vec![phase];
        while let Some(next) = phase.successor() {
            visited.push(next);
            phase = next;
        }
        assert_eq!(
            visited,
            vec![
                TrialPhase::Setup,
                TrialPhase::OpeningStatements,
                TrialPhase::WitnessExamination,
                TrialPhase::ClosingArguments,
                TrialPhase::JuryDeliberation,
                TrialPhase::Verdict,
                TrialPhase::Completed,
            ]
        );
    }

    #[test]
    fn only_completed_is_terminal() {
        for phase in TrialPhase::iter() {
            assert_eq!(phase.is_terminal(), phase == TrialPhase::Completed);
            assert_eq!(phase.successor().is_none(), phase.is_terminal());
        }
    }

    #[test]
    fn phase_strings_round_trip() {
        assert_eq!(TrialPhase::OpeningStatements.to_string(), "opening_statements");
        assert_eq!(
            "witness_examination".parse::<TrialPhase>().unwrap(),
            TrialPhase::WitnessExamination
        );
    }
}
