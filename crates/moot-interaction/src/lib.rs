//! Content-generation capability for the Moot trial engine.
//!
//! This crate hosts the boundary between the orchestration core and
//! natural-language generation: the [`CourtAgent`] trait, the
//! role-conditioned courtroom agents, the text backends they delegate
//! to, and the [`AgentRegistry`] capability table the orchestrator
//! resolves agents through.

pub mod agent;
pub mod agents;
pub mod backend;
pub mod openai;
pub mod registry;

pub use agent::{AgentReply, CourtAgent};
pub use agents::PromptAgent;
pub use backend::{ScriptedBackend, TextBackend};
pub use openai::OpenAiBackend;
pub use registry::{AgentRegistry, AgentSeed};
