//! In-memory case repository.
//!
//! Cases are immutable snapshots; there is no persistence in the
//! engine, so the catalog lives in memory for the process lifetime.

use async_trait::async_trait;
use moot_core::case::Case;
use moot_core::repository::CaseRepository;
use moot_core::Result;
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only case catalog held in memory.
pub struct InMemoryCaseRepository {
    cases: HashMap<Uuid, Case>,
}

impl InMemoryCaseRepository {
    /// Creates a repository holding the given cases.
    pub fn new(cases: impl IntoIterator<Item = Case>) -> Self {
        Self {
            cases: cases.into_iter().map(|case| (case.id, case)).collect(),
        }
    }

    /// Creates a repository seeded with the bundled sample case.
    pub fn with_sample_case() -> Self {
        Self::new([crate::sample_case::sample_case()])
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn find_by_id(&self, case_id: &Uuid) -> Result<Option<Case>> {
        Ok(self.cases.get(case_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Case>> {
        Ok(self.cases.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_seeded_cases_by_id() {
        let repository = InMemoryCaseRepository::with_sample_case();
        let cases = repository.list_all().await.unwrap();
        assert_eq!(cases.len(), 1);

        let case = repository.find_by_id(&cases[0].id).await.unwrap();
        assert_eq!(case.unwrap().title, "State v. Marcus Johnson");
    }

    #[tokio::test]
    async fn unknown_ids_yield_none() {
        let repository = InMemoryCaseRepository::with_sample_case();
        let missing = repository.find_by_id(&Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }
}
