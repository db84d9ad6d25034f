pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::AppConfig;

pub use adapters::catalog_file::{load_catalog, CatalogFile};
pub use adapters::local_store::LocalStore;
pub use adapters::memory::{InMemoryCatalog, MemoryStore};
pub use crate::core::{
    engine::RecommendationEngine,
    matcher::CareerMatcher,
    path_generator::{GeneratedPath, PathGenerator},
    suggestions::{SkillSuggester, DEFAULT_SUGGESTION_LIMIT},
};
pub use utils::error::{Result, SkillPathError};
