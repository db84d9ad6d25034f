use crate::domain::model::{
    Career, CareerId, Domain, DomainId, LearningPath, LearningPathId, PathStep, Skill, SkillId,
    StepStatus, UserId, UserProfile,
};
use crate::utils::error::Result;

/// Read access to the reference catalog (domains, skills, careers).
pub trait CatalogStore {
    fn domains(&self) -> Result<Vec<Domain>>;
    fn domain(&self, id: DomainId) -> Result<Option<Domain>>;
    fn careers_by_domain(&self, domain: DomainId) -> Result<Vec<Career>>;
    fn skills_by_domain(&self, domain: DomainId) -> Result<Vec<Skill>>;
    fn skill(&self, id: SkillId) -> Result<Option<Skill>>;
    fn career(&self, id: CareerId) -> Result<Option<Career>>;

    /// Skills a career requires, in declaration order, duplicates dropped.
    fn required_skills(&self, career: &Career) -> Result<Vec<Skill>>;

    fn prerequisites(&self, skill: &Skill) -> Result<Vec<Skill>>;
}

pub trait ProfileStore {
    fn profile(&self, user: UserId) -> Result<Option<UserProfile>>;
    fn save_profile(&mut self, profile: UserProfile) -> Result<()>;
}

/// Write side for generated learning paths. Every `create_learning_path`
/// call yields a new independent path.
pub trait PathStore {
    fn create_learning_path(
        &mut self,
        user: UserId,
        career: Option<CareerId>,
        title: &str,
    ) -> Result<LearningPath>;

    fn create_path_step(
        &mut self,
        path: LearningPathId,
        skill: SkillId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep>;

    fn learning_path(&self, id: LearningPathId) -> Result<Option<LearningPath>>;
    fn paths_for_user(&self, user: UserId) -> Result<Vec<LearningPath>>;

    fn update_step_status(
        &mut self,
        path: LearningPathId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep>;
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn suggestion_limit(&self) -> usize;
}
