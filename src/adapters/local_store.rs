use crate::adapters::memory::MemoryStore;
use crate::core::{
    CareerId, LearningPath, LearningPathId, PathStep, PathStore, ProfileStore, SkillId,
    StepStatus, UserId, UserProfile,
};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "skillpath_store.json";

/// Profiles and learning paths persisted as one JSON document under
/// `base_path`. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: PathBuf,
    state: MemoryStore,
}

impl LocalStore {
    pub fn open<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        let file = base_path.join(STORE_FILE);

        let state = if file.exists() {
            let data = fs::read(&file)?;
            serde_json::from_slice(&data)?
        } else {
            tracing::debug!("No store at {}, starting empty", file.display());
            MemoryStore::default()
        };

        Ok(Self { base_path, state })
    }

    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(STORE_FILE)
    }

    /// Applies `change` to a copy of the state and keeps it only once the
    /// copy is on disk.
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.state.clone();
        let value = change(&mut next)?;
        self.persist(&next)?;
        self.state = next;
        Ok(value)
    }

    fn persist(&self, state: &MemoryStore) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;

        let data = serde_json::to_vec_pretty(state)?;
        let tmp = self.base_path.join(format!("{}.tmp", STORE_FILE));
        fs::write(&tmp, &data)?;
        fs::rename(&tmp, self.file_path())?;

        tracing::debug!("Wrote store ({} bytes) to {}", data.len(), self.file_path().display());
        Ok(())
    }
}

impl ProfileStore for LocalStore {
    fn profile(&self, user: UserId) -> Result<Option<UserProfile>> {
        self.state.profile(user)
    }

    fn save_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.commit(|state| state.save_profile(profile))
    }
}

impl PathStore for LocalStore {
    fn create_learning_path(
        &mut self,
        user: UserId,
        career: Option<CareerId>,
        title: &str,
    ) -> Result<LearningPath> {
        self.commit(|state| state.create_learning_path(user, career, title))
    }

    fn create_path_step(
        &mut self,
        path: LearningPathId,
        skill: SkillId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep> {
        self.commit(|state| state.create_path_step(path, skill, step_order, status))
    }

    fn learning_path(&self, id: LearningPathId) -> Result<Option<LearningPath>> {
        self.state.learning_path(id)
    }

    fn paths_for_user(&self, user: UserId) -> Result<Vec<LearningPath>> {
        self.state.paths_for_user(user)
    }

    fn update_step_status(
        &mut self,
        path: LearningPathId,
        step_order: u32,
        status: StepStatus,
    ) -> Result<PathStep> {
        self.commit(|state| state.update_step_status(path, step_order, status))
    }
}
