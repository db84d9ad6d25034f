use crate::core::{
    Career, CareerId, CatalogStore, Domain, DomainId, LearningPath, LearningPathId, PathStep,
    PathStore, ProfileStore, Skill, SkillId, StepStatus, UserId, UserProfile,
};
use crate::utils::error::{Result, SkillPathError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable catalog snapshot. Lookups go through id indexes; listings keep
/// the order records were loaded in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    domains: Vec<Domain>,
    skills: Vec<Skill>,
    careers: Vec<Career>,
    domain_index: HashMap<DomainId, usize>,
    skill_index: HashMap<SkillId, usize>,
    career_index: HashMap<CareerId, usize>,
}

impl InMemoryCatalog {
    pub fn new(domains: Vec<Domain>, skills: Vec<Skill>, careers: Vec<Career>) -> Self {
        let domain_index = domains.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let skill_index = skills.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        let career_index = careers.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

        Self {
            domains,
            skills,
            careers,
            domain_index,
            skill_index,
            career_index,
        }
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn career_count(&self) -> usize {
        self.careers.len()
    }

    fn resolve_skill(&self, id: SkillId, referenced_by: &str) -> Result<Skill> {
        self.skill_index
            .get(&id)
            .map(|&i| self.skills[i].clone())
            .ok_or_else(|| {
                SkillPathError::storage(format!("{} references unknown skill {}", referenced_by, id))
            })
    }
}

impl CatalogStore for InMemoryCatalog {
    fn domains(&self) -> Result<Vec<Domain>> {
        Ok(self.domains.clone())
    }

    fn domain(&self, id: DomainId) -> Result<Option<Domain>> {
        Ok(self.domain_index.get(&id).map(|&i| self.domains[i].clone()))
    }

    fn careers_by_domain(&self, domain: DomainId) -> Result<Vec<Career>> {
        Ok(self
            .careers
            .iter()
            .filter(|c| c.domain == domain)
            .cloned()
            .collect())
    }

    fn skills_by_domain(&self, domain: DomainId) -> Result<Vec<Skill>> {
        Ok(self
            .skills
            .iter()
            .filter(|s| s.domain == domain)
            .cloned()
            .collect())
    }

    fn skill(&self, id: SkillId) -> Result<Option<Skill>> {
        Ok(self.skill_index.get(&id).map(|&i| self.skills[i].clone()))
    }

    fn career(&self, id: CareerId) -> Result<Option<Career>> {
        Ok(self.career_index.get(&id).map(|&i| self.careers[i].clone()))
    }

    fn required_skills(&self, career: &Career) -> Result<Vec<Skill>> {
        let referenced_by = format!("career {}", career.id);
        career
            .distinct_required_skills()
            .into_iter()
            .map(|id| self.resolve_skill(id, &referenced_by))
            .collect()
    }

    fn prerequisites(&self, skill: &Skill) -> Result<Vec<Skill>> {
        let referenced_by = format!("skill {}", skill.id);
        skill
            .prerequisites
            .iter()
            .map(|id| self.resolve_skill(*id, &referenced_by))
            .collect()
    }
}

/// Profiles and learning paths held in memory. Also the on-disk shape of
/// `LocalStore`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    profiles: Vec<UserProfile>,
    #[serde(default)]
    paths: Vec<LearningPath>,
    #[serde(default)]
    last_path_id: u64,
}

impl MemoryStore {
    fn path_mut(&mut self, id: LearningPathId) -> Result<&mut LearningPath> {
        self.paths
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SkillPathError::NotFound {
                kind: "learning path",
                id: id.0,
            })
    }
}

impl ProfileStore for MemoryStore {
    fn profile(&self, user: UserId) -> Result<Option<UserProfile>> {
        Ok(self.profiles.iter().find(|p| p.user == user).cloned())
    }

    fn save_profile(&mut self, profile: UserProfile) -> Result<()> {
        match self.profiles.iter_mut().find(|p| p.user == profile.user) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }
}

impl PathStore for MemoryStore {
    fn create_learning_path(
        &mut self,
        user: UserId,
        career: Option<CareerId>,
        title: &str,
    ) -> Result<LearningPath> {
        self.last_path_id += 1;
        let path = LearningPath {
            id: LearningPathId(self.last_path_id),
            user,
            career,
            title: title.to_string(),
            created_at: Utc::now(),
            steps: Vec::new(),
        };
        self.paths.push(path.clone());
        Ok(path)
    }

    fn create_path_step(
        &mut self,
        path: LearningPathId,
        skill: SkillId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep> {
        let learning_path = self.path_mut(path)?;
        let expected = learning_path.steps.len() as u32 + 1;
        if step_order != expected {
            return Err(SkillPathError::storage(format!(
                "learning path {} expects step {} next, got {}",
                path, expected, step_order
            )));
        }

        let step = PathStep {
            skill,
            step_order,
            status,
        };
        learning_path.steps.push(step.clone());
        Ok(step)
    }

    fn learning_path(&self, id: LearningPathId) -> Result<Option<LearningPath>> {
        Ok(self.paths.iter().find(|p| p.id == id).cloned())
    }

    fn paths_for_user(&self, user: UserId) -> Result<Vec<LearningPath>> {
        Ok(self
            .paths
            .iter()
            .filter(|p| p.user == user)
            .cloned()
            .collect())
    }

    fn update_step_status(
        &mut self,
        path: LearningPathId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep> {
        let learning_path = self.path_mut(path)?;
        let step = learning_path
            .steps
            .iter_mut()
            .find(|s| s.step_order == step_order)
            .ok_or_else(|| {
                SkillPathError::invalid_input(format!(
                    "learning path {} has no step {}",
                    path, step_order
                ))
            })?;
        step.status = status;
        Ok(step.clone())
    }
}
