//! Case repository trait.
//!
//! Defines the read-only lookup interface for case data. Cases are
//! immutable snapshots; the engine consumes them but never writes back.

use crate::case::Case;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// An abstract read-only repository for case data.
///
/// This decouples the orchestrator from the specific case source
/// (bundled sample data, files, a remote catalog).
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Finds a case by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Case))`: case found
    /// - `Ok(None)`: case not found
    /// - `Err(_)`: error occurred during retrieval
    async fn find_by_id(&self, case_id: &Uuid) -> Result<Option<Case>>;

    /// Lists all available cases.
    async fn list_all(&self) -> Result<Vec<Case>>;
}
