//! Property tests for ranking, path ordering and suggestions.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/fixtures.rs"]
mod fixtures;

#[path = "properties/career_ranking.rs"]
mod career_ranking;

#[path = "properties/path_ordering.rs"]
mod path_ordering;

#[path = "properties/suggestions.rs"]
mod suggestions;
