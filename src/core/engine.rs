use crate::core::matcher::CareerMatcher;
use crate::core::path_generator::{GeneratedPath, PathGenerator};
use crate::core::suggestions::{SkillSuggester, DEFAULT_SUGGESTION_LIMIT};
use crate::core::{
    CareerId, CatalogStore, Domain, PathStore, PrerequisiteGraph, ProfileStore, ScoredCareer,
    Skill, SkillId, UserId, UserProfile,
};
use crate::utils::error::{Result, SkillPathError};
use std::collections::HashSet;

/// Runs the recommendation workflow for a user whose profile lives in a
/// `ProfileStore`, reading reference data from a borrowed catalog.
pub struct RecommendationEngine<'a, C: CatalogStore + ?Sized> {
    catalog: &'a C,
    suggestion_limit: usize,
}

impl<'a, C: CatalogStore + ?Sized> RecommendationEngine<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn matcher(&self) -> CareerMatcher<'a, C> {
        CareerMatcher::new(self.catalog)
    }

    pub fn path_generator(&self) -> PathGenerator<'a, C> {
        PathGenerator::new(self.catalog)
    }

    pub fn suggester(&self) -> SkillSuggester<'a, C> {
        SkillSuggester::new(self.catalog)
    }

    pub fn profile<P: ProfileStore + ?Sized>(&self, profiles: &P, user: UserId) -> Result<UserProfile> {
        profiles
            .profile(user)?
            .ok_or(SkillPathError::MissingProfile { user: user.0 })
    }

    /// The user's skills as catalog records, in profile order.
    pub fn current_skills(&self, profile: &UserProfile) -> Result<Vec<Skill>> {
        profile
            .skills
            .iter()
            .map(|id| {
                self.catalog.skill(*id)?.ok_or(SkillPathError::NotFound {
                    kind: "skill",
                    id: id.0,
                })
            })
            .collect()
    }

    pub fn profile_domain(&self, profile: &UserProfile) -> Result<Domain> {
        let domain_id = profile.domain.ok_or_else(|| {
            SkillPathError::invalid_input(format!("the profile for user {} has no domain set", profile.user))
        })?;
        self.catalog.domain(domain_id)?.ok_or(SkillPathError::NotFound {
            kind: "domain",
            id: domain_id.0,
        })
    }

    pub fn recommend_for_user<P: ProfileStore + ?Sized>(
        &self,
        profiles: &P,
        user: UserId,
    ) -> Result<Vec<ScoredCareer>> {
        let profile = self.profile(profiles, user)?;
        self.recommend_for_profile(&profile)
    }

    pub fn recommend_for_profile(&self, profile: &UserProfile) -> Result<Vec<ScoredCareer>> {
        let domain = self.profile_domain(profile)?;

        let ranked = self.matcher().rank(Some(&domain), &profile.skills)?;
        tracing::info!(
            "Ranked {} careers in '{}' for user {}",
            ranked.len(),
            domain.name,
            profile.user
        );
        Ok(ranked)
    }

    pub fn generate_for_user<P, S>(
        &self,
        profiles: &P,
        paths: &mut S,
        user: UserId,
        career: CareerId,
    ) -> Result<GeneratedPath>
    where
        P: ProfileStore + ?Sized,
        S: PathStore + ?Sized,
    {
        let profile = self.profile(profiles, user)?;
        self.generate_for_profile(paths, &profile, career)
    }

    pub fn generate_for_profile<S: PathStore + ?Sized>(
        &self,
        paths: &mut S,
        profile: &UserProfile,
        career: CareerId,
    ) -> Result<GeneratedPath> {
        let current = self.current_skills(profile)?;
        let career = self.catalog.career(career)?.ok_or(SkillPathError::NotFound {
            kind: "career",
            id: career.0,
        })?;

        self.path_generator()
            .generate(paths, profile.user, Some(&career), &current)
    }

    /// Generates a path toward the best-ranked career in the profile's
    /// domain. Returns `None` when the domain has no careers.
    pub fn generate_for_top_career<S: PathStore + ?Sized>(
        &self,
        paths: &mut S,
        profile: &UserProfile,
    ) -> Result<Option<(ScoredCareer, GeneratedPath)>> {
        let ranked = self.recommend_for_profile(profile)?;
        let Some(top) = ranked.into_iter().next() else {
            tracing::warn!("No careers to build a path toward for user {}", profile.user);
            return Ok(None);
        };

        let current = self.current_skills(profile)?;
        let generated = self
            .path_generator()
            .generate(paths, profile.user, Some(&top.career), &current)?;
        Ok(Some((top, generated)))
    }

    pub fn suggest_for_user<P: ProfileStore + ?Sized>(
        &self,
        profiles: &P,
        user: UserId,
        limit: Option<usize>,
    ) -> Result<Vec<Skill>> {
        let profile = self.profile(profiles, user)?;
        let domain = self.profile_domain(&profile)?;
        let current = self.current_skills(&profile)?;

        self.suggester().suggest(
            Some(&domain),
            &current,
            limit.unwrap_or(self.suggestion_limit),
        )
    }

    /// Direct prerequisites of `skill` that are not in `current_skills`.
    pub fn blocked_by(&self, skill: &Skill, current_skills: &[SkillId]) -> Result<Vec<Skill>> {
        let held: HashSet<SkillId> = current_skills.iter().copied().collect();
        let graph = PrerequisiteGraph::from_skills([skill]);

        graph
            .missing_prerequisites(skill.id, &held)
            .into_iter()
            .map(|id| {
                self.catalog.skill(id)?.ok_or_else(|| {
                    SkillPathError::storage(format!(
                        "skill {} lists unknown prerequisite {}",
                        skill.id, id
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalog, MemoryStore};
    use crate::domain::model::{Career, DifficultyLevel, DomainId};

    fn skill(id: u64, name: &str, difficulty: DifficultyLevel, prerequisites: &[u64]) -> Skill {
        Skill {
            id: SkillId(id),
            name: name.to_string(),
            domain: DomainId(1),
            description: String::new(),
            difficulty: Some(difficulty),
            prerequisites: prerequisites.iter().copied().map(SkillId).collect(),
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(
            vec![Domain {
                id: DomainId(1),
                name: "Web".to_string(),
                description: String::new(),
            }],
            vec![
                skill(1, "A", DifficultyLevel::Beginner, &[]),
                skill(2, "B", DifficultyLevel::Intermediate, &[]),
                skill(3, "X", DifficultyLevel::Advanced, &[]),
                skill(4, "Y", DifficultyLevel::Beginner, &[2]),
            ],
            vec![Career {
                id: CareerId(1),
                title: "C".to_string(),
                domain: DomainId(1),
                description: String::new(),
                required_skills: vec![SkillId(1), SkillId(2), SkillId(3)],
                average_salary: Some("$1 - $2".to_string()),
            }],
        )
    }

    fn profile(user: u64, domain: Option<u64>, skills: &[u64]) -> UserProfile {
        UserProfile {
            user: UserId(user),
            username: format!("user{}", user),
            domain: domain.map(DomainId),
            skills: skills.iter().copied().map(SkillId).collect(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_worked_example_end_to_end() {
        let catalog = catalog();
        let mut store = MemoryStore::default();
        store.save_profile(profile(1, Some(1), &[1])).unwrap();
        let engine = RecommendationEngine::new(&catalog);

        let ranked = engine.recommend_for_user(&store, UserId(1)).unwrap();
        assert_eq!(ranked[0].matching_count, 1);
        assert_eq!(ranked[0].total_required, 3);

        let mut paths = MemoryStore::default();
        let generated = engine
            .generate_for_user(&store, &mut paths, UserId(1), CareerId(1))
            .unwrap();
        let names: Vec<&str> = generated.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "X"]);

        let suggested = engine.suggest_for_user(&store, UserId(1), None).unwrap();
        let names: Vec<&str> = suggested.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "X"]);
    }

    #[test]
    fn test_missing_profile_is_reported() {
        let catalog = catalog();
        let store = MemoryStore::default();
        let engine = RecommendationEngine::new(&catalog);

        let err = engine.recommend_for_user(&store, UserId(99)).unwrap_err();
        assert!(matches!(err, SkillPathError::MissingProfile { user: 99 }));

        let mut paths = MemoryStore::default();
        let err = engine
            .generate_for_user(&store, &mut paths, UserId(99), CareerId(1))
            .unwrap_err();
        assert!(matches!(err, SkillPathError::MissingProfile { .. }));
        assert!(paths.paths_for_user(UserId(99)).unwrap().is_empty());
    }

    #[test]
    fn test_profile_without_domain_is_invalid_input() {
        let catalog = catalog();
        let mut store = MemoryStore::default();
        store.save_profile(profile(2, None, &[])).unwrap();

        let err = RecommendationEngine::new(&catalog)
            .recommend_for_user(&store, UserId(2))
            .unwrap_err();
        assert!(matches!(err, SkillPathError::InvalidInput { .. }));
    }

    #[test]
    fn test_top_career_path_uses_best_match() {
        let catalog = catalog();
        let mut store = MemoryStore::default();
        store.save_profile(profile(1, Some(1), &[1, 2])).unwrap();

        let profile = store.profile(UserId(1)).unwrap().unwrap();

        let (top, generated) = RecommendationEngine::new(&catalog)
            .generate_for_top_career(&mut store, &profile)
            .unwrap()
            .unwrap();
        assert_eq!(top.career.id, CareerId(1));
        assert_eq!(generated.path.steps.len(), 1);
        assert_eq!(generated.skills[0].name, "X");
    }

    #[test]
    fn test_blocked_by_lists_unheld_prerequisites() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);
        let y = catalog.skill(SkillId(4)).unwrap().unwrap();

        let blocked = engine.blocked_by(&y, &[SkillId(1)]).unwrap();
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].name, "B");
        assert!(engine.blocked_by(&y, &[SkillId(2)]).unwrap().is_empty());
    }

    #[test]
    fn test_blocked_by_reports_unknown_prerequisite() {
        let catalog = catalog();
        let orphan = skill(50, "Orphan", DifficultyLevel::Beginner, &[99]);

        let err = RecommendationEngine::new(&catalog)
            .blocked_by(&orphan, &[])
            .unwrap_err();
        assert!(matches!(err, SkillPathError::Storage { .. }));
    }

    #[test]
    fn test_suggestions_default_to_ten() {
        let skills: Vec<Skill> = (1..=12)
            .map(|id| skill(id, &format!("S{}", id), DifficultyLevel::Beginner, &[]))
            .collect();
        let catalog = InMemoryCatalog::new(
            vec![Domain {
                id: DomainId(1),
                name: "Wide".to_string(),
                description: String::new(),
            }],
            skills,
            vec![],
        );
        let mut store = MemoryStore::default();
        store.save_profile(profile(1, Some(1), &[])).unwrap();

        let suggested = RecommendationEngine::new(&catalog)
            .suggest_for_user(&store, UserId(1), None)
            .unwrap();

        assert_eq!(DEFAULT_SUGGESTION_LIMIT, 10);
        let ids: Vec<u64> = suggested.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_suggestion_limit_is_configurable() {
        let catalog = catalog();
        let mut store = MemoryStore::default();
        store.save_profile(profile(1, Some(1), &[])).unwrap();

        let suggested = RecommendationEngine::new(&catalog)
            .with_suggestion_limit(2)
            .suggest_for_user(&store, UserId(1), None)
            .unwrap();
        assert_eq!(suggested.len(), 2);
    }
}
