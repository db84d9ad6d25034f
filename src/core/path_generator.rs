use crate::core::{CatalogStore, Career, LearningPath, PathStore, Skill, SkillId, StepStatus, UserId};
use crate::utils::error::{Result, SkillPathError};
use std::collections::HashSet;

/// A persisted path together with the skills its steps point at, in step order.
#[derive(Debug, Clone)]
pub struct GeneratedPath {
    pub path: LearningPath,
    pub skills: Vec<Skill>,
}

pub struct PathGenerator<'a, C: CatalogStore + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogStore + ?Sized> PathGenerator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Skills the career requires that are not in `current_skills`, easiest
    /// tier first. Nothing is persisted.
    pub fn plan(&self, career: Option<&Career>, current_skills: &[Skill]) -> Result<Vec<Skill>> {
        let career = career.ok_or_else(|| {
            SkillPathError::invalid_input("a target career is required to plan a learning path")
        })?;
        let required = self.catalog.required_skills(career)?;
        Ok(order_missing_skills(required, current_skills))
    }

    /// Plans the missing skills and records them as a new learning path for
    /// `user`, one "Not Started" step per skill numbered from 1.
    pub fn generate<P: PathStore + ?Sized>(
        &self,
        paths: &mut P,
        user: UserId,
        career: Option<&Career>,
        current_skills: &[Skill],
    ) -> Result<GeneratedPath> {
        let career = career.ok_or_else(|| {
            SkillPathError::invalid_input("a target career is required to generate a learning path")
        })?;
        let ordered = self.plan(Some(career), current_skills)?;

        let title = format!("{} path", career.title);
        let mut path = paths.create_learning_path(user, Some(career.id), &title)?;

        for (index, skill) in ordered.iter().enumerate() {
            let step_order = index as u32 + 1;
            let step = paths.create_path_step(path.id, skill.id, step_order, StepStatus::NotStarted)?;
            path.steps.push(step);
        }

        if ordered.is_empty() {
            tracing::info!(
                "User {} already holds every skill for '{}'; created empty path {}",
                user,
                career.title,
                path.id
            );
        } else {
            tracing::info!(
                "Created learning path {} for user {} with {} steps toward '{}'",
                path.id,
                user,
                path.steps.len(),
                career.title
            );
        }

        Ok(GeneratedPath {
            path,
            skills: ordered,
        })
    }
}

/// Set difference `required - current` by skill id, stably sorted by
/// difficulty rank so equal tiers keep their declaration order.
pub fn order_missing_skills(required: Vec<Skill>, current_skills: &[Skill]) -> Vec<Skill> {
    let mut seen: HashSet<SkillId> = current_skills.iter().map(|s| s.id).collect();

    let mut to_learn: Vec<Skill> = required
        .into_iter()
        .filter(|skill| seen.insert(skill.id))
        .collect();

    to_learn.sort_by_key(Skill::difficulty_rank);
    to_learn
}
