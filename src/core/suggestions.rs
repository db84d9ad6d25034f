use crate::core::{CatalogStore, Domain, PrerequisiteGraph, Skill, SkillId};
use crate::utils::error::{Result, SkillPathError};
use std::collections::HashSet;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Finds skills in a domain the user could start next: not yet held, with
/// every direct prerequisite already held.
pub struct SkillSuggester<'a, C: CatalogStore + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogStore + ?Sized> SkillSuggester<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn suggest(
        &self,
        domain: Option<&Domain>,
        current_skills: &[Skill],
        limit: usize,
    ) -> Result<Vec<Skill>> {
        let domain = domain
            .ok_or_else(|| SkillPathError::invalid_input("a domain is required to suggest skills"))?;
        let skills = self.catalog.skills_by_domain(domain.id)?;
        let suggested = eligible_skills(skills, current_skills, limit);

        tracing::debug!(
            "Suggesting {} skills in '{}' (limit {})",
            suggested.len(),
            domain.name,
            limit
        );
        Ok(suggested)
    }
}

/// Eligible skills in store order, at most `limit` of them.
pub fn eligible_skills(skills: Vec<Skill>, current_skills: &[Skill], limit: usize) -> Vec<Skill> {
    let held: HashSet<SkillId> = current_skills.iter().map(|s| s.id).collect();
    let graph = PrerequisiteGraph::from_skills(&skills);

    skills
        .into_iter()
        .filter(|skill| !held.contains(&skill.id))
        .filter(|skill| graph.is_eligible(skill.id, &held))
        .take(limit)
        .collect()
}
