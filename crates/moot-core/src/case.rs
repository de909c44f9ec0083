//! Case domain model.
//!
//! A `Case` is an immutable snapshot sourced from the case repository.
//! Sessions reference cases by id and never mutate them; the
//! authoritative admission state for evidence lives on the session.

use crate::role::CourtRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A piece of evidence belonging to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Title of the evidence
    pub title: String,
    /// Short description
    pub description: String,
    /// Full content (testimony text, document body, etc.)
    pub content: String,
    /// Type of evidence (document, photo, testimony, video, physical, ...)
    pub evidence_type: String,
    /// Which side submitted this evidence
    pub submitted_by: CourtRole,
    /// Informational flag on the case snapshot; the session's admitted
    /// set is authoritative during a trial
    #[serde(default)]
    pub is_admitted: bool,
}

/// A witness attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Witness {
    /// Name of the witness
    pub name: String,
    /// Background information about the witness
    pub background: String,
    /// What the witness knows about the case
    pub knowledge: String,
    /// Any potential bias
    pub bias: Option<String>,
    /// Which side called this witness
    pub called_by: CourtRole,
}

/// A legal case for simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Unique case ID
    pub id: Uuid,
    /// Title of the case
    pub title: String,
    /// Description of the case
    pub description: String,
    /// Criminal charges
    pub charges: Vec<String>,
    /// Facts of the case
    pub case_facts: String,
    /// Prosecution's theory of the case
    pub prosecution_theory: String,
    /// Defense theory of the case
    pub defense_theory: String,
    /// Evidence in the case
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Witnesses in the case
    #[serde(default)]
    pub witnesses: Vec<Witness>,
    /// Relevant legal precedents
    #[serde(default)]
    pub legal_precedents: Vec<String>,
}

impl Case {
    /// Looks up a witness by name.
    pub fn witness_by_name(&self, name: &str) -> Option<&Witness> {
        self.witnesses.iter().find(|w| w.name == name)
    }
}
