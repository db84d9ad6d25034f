use crate::core::{CatalogStore, Career, Domain, ScoredCareer, SkillId};
use crate::utils::error::{Result, SkillPathError};
use std::collections::HashSet;

/// Scores every career in a domain by how many of its required skills the
/// user already holds.
pub struct CareerMatcher<'a, C: CatalogStore + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogStore + ?Sized> CareerMatcher<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Ranked careers for `domain`, best overlap first. Careers with equal
    /// scores keep the order the catalog returned them in.
    pub fn rank(&self, domain: Option<&Domain>, user_skills: &[SkillId]) -> Result<Vec<ScoredCareer>> {
        let domain =
            domain.ok_or_else(|| SkillPathError::invalid_input("a domain is required to rank careers"))?;

        let careers = self.catalog.careers_by_domain(domain.id)?;
        tracing::debug!(
            "Ranking {} careers in '{}' against {} user skills",
            careers.len(),
            domain.name,
            user_skills.len()
        );

        let held: HashSet<SkillId> = user_skills.iter().copied().collect();
        Ok(score_careers(careers, &held))
    }
}

pub fn score_career(career: Career, held: &HashSet<SkillId>) -> ScoredCareer {
    let required = career.distinct_required_skills();
    let total_required = required.len();
    let matching_count = required.iter().filter(|id| held.contains(id)).count();

    let score = if total_required > 0 {
        matching_count as f64 / total_required as f64
    } else {
        0.0
    };

    ScoredCareer {
        career,
        score,
        matching_count,
        total_required,
    }
}

pub fn score_careers(careers: Vec<Career>, held: &HashSet<SkillId>) -> Vec<ScoredCareer> {
    let mut scored: Vec<ScoredCareer> = careers
        .into_iter()
        .map(|career| score_career(career, held))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
