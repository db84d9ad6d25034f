pub mod engine;
pub mod matcher;
pub mod path_generator;
pub mod suggestions;

pub use crate::domain::graph::PrerequisiteGraph;
pub use crate::domain::model::{
    Career, CareerId, DifficultyLevel, Domain, DomainId, LearningPath, LearningPathId, PathStep,
    ScoredCareer, Skill, SkillId, StepStatus, UserId, UserProfile,
};
pub use crate::domain::ports::{CatalogStore, ConfigProvider, PathStore, ProfileStore};
pub use crate::utils::error::Result;
