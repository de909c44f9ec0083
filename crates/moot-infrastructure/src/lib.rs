//! Infrastructure for the Moot trial engine: the bundled case catalog
//! and generation settings loading.

pub mod in_memory_case_repository;
pub mod sample_case;
pub mod settings;

pub use in_memory_case_repository::InMemoryCaseRepository;
pub use settings::GenerationSettings;
