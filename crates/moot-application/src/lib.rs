//! Session orchestration for the Moot trial engine.
//!
//! [`TrialService`] glues the domain core to the content-generation
//! capability: it validates requests, invokes the right agent, records
//! transcript entries, applies turn updates, and exposes the
//! bookkeeping operations that sit outside the turn protocol.

pub mod trial_service;

pub use trial_service::TrialService;
