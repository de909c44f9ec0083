//! Trial session domain module.
//!
//! - `model`: the mutable unit of simulation state (`TrialSession`)
//!   and its nested entities (participants, transcript entries,
//!   objections, verdict).

mod model;

pub use model::{
    EvidenceRuling, Objection, ObjectionRuling, ObjectionType, Participant, TranscriptEntry,
    TrialSession, Verdict,
};
