//! Agent registry.
//!
//! A capability lookup table mapping each courtroom role to an agent
//! factory. The orchestrator resolves agents through this table instead
//! of branching on the role, so new roles can be added without touching
//! its control flow.

use crate::agent::CourtAgent;
use crate::agents::PromptAgent;
use crate::backend::TextBackend;
use moot_core::case::Case;
use moot_core::role::CourtRole;
use moot_core::{MootError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Per-request material handed to an agent factory.
///
/// Witness factories resolve the concrete witness from the case using
/// the `witness_name` context value; the other factories ignore it.
pub struct AgentSeed<'a> {
    pub case: Option<&'a Case>,
    pub context: &'a HashMap<String, serde_json::Value>,
}

type Factory = Box<dyn for<'a> Fn(&AgentSeed<'a>) -> Result<Box<dyn CourtAgent>> + Send + Sync>;

/// Role-to-factory table for constructing courtroom agents.
pub struct AgentRegistry {
    factories: HashMap<CourtRole, Factory>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with the five standard courtroom agents, all
    /// backed by `backend`.
    pub fn with_defaults(backend: Arc<dyn TextBackend>) -> Self {
        let mut registry = Self::new();

        let b = backend.clone();
        registry.register(CourtRole::Judge, move |_| {
            Ok(Box::new(PromptAgent::judge(b.clone())) as Box<dyn CourtAgent>)
        });
        let b = backend.clone();
        registry.register(CourtRole::Prosecutor, move |_| {
            Ok(Box::new(PromptAgent::prosecutor(b.clone())) as Box<dyn CourtAgent>)
        });
        let b = backend.clone();
        registry.register(CourtRole::Defense, move |_| {
            Ok(Box::new(PromptAgent::defense(b.clone())) as Box<dyn CourtAgent>)
        });
        let b = backend.clone();
        registry.register(CourtRole::Jury, move |_| {
            Ok(Box::new(PromptAgent::jury(b.clone())) as Box<dyn CourtAgent>)
        });
        let b = backend;
        registry.register(CourtRole::Witness, move |seed| {
            let witness = resolve_witness(seed)?;
            Ok(Box::new(PromptAgent::for_witness(witness, b.clone())) as Box<dyn CourtAgent>)
        });

        registry
    }

    /// Registers (or replaces) the factory for `role`.
    pub fn register<F>(&mut self, role: CourtRole, factory: F)
    where
        F: for<'a> Fn(&AgentSeed<'a>) -> Result<Box<dyn CourtAgent>> + Send + Sync + 'static,
    {
        self.factories.insert(role, Box::new(factory));
    }

    /// Constructs an agent for `role`.
    ///
    /// # Errors
    ///
    /// `InvalidRole` when no factory is registered for the role;
    /// factory-specific errors otherwise (e.g. unknown witness).
    pub fn create(&self, role: CourtRole, seed: &AgentSeed<'_>) -> Result<Box<dyn CourtAgent>> {
        let factory = self
            .factories
            .get(&role)
            .ok_or_else(|| MootError::InvalidRole(role.to_string()))?;
        factory(seed)
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Witness requests without a name, or naming someone not on the case,
// are caller errors and surface as NotFound.
fn resolve_witness<'a>(seed: &AgentSeed<'a>) -> Result<&'a moot_core::case::Witness> {
    let name = seed
        .context
        .get("witness_name")
        .and_then(|value| value.as_str())
        .ok_or_else(|| MootError::not_found("witness_name", "(missing from request context)"))?;

    let case = seed
        .case
        .ok_or_else(|| MootError::not_found("case", "(no case attached to session)"))?;

    case.witness_by_name(name)
        .ok_or_else(|| MootError::not_found("witness", name))
}
