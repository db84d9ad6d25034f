use crate::domain::model::{Skill, SkillId};
use std::collections::{HashMap, HashSet};

/// Prerequisite edges keyed by skill id. Edges point from a skill to the
/// skills it requires. Cycles are stored as given; nothing here walks the
/// graph transitively.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    edges: HashMap<SkillId, Vec<SkillId>>,
}

impl PrerequisiteGraph {
    pub fn from_skills<'a, I>(skills: I) -> Self
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        let mut graph = Self::default();
        for skill in skills {
            graph.insert(skill.id, skill.prerequisites.iter().copied());
        }
        graph
    }

    pub fn insert<I>(&mut self, skill: SkillId, prerequisites: I)
    where
        I: IntoIterator<Item = SkillId>,
    {
        let entry = self.edges.entry(skill).or_default();
        for prerequisite in prerequisites {
            if !entry.contains(&prerequisite) {
                entry.push(prerequisite);
            }
        }
    }

    pub fn prerequisites_of(&self, skill: SkillId) -> &[SkillId] {
        self.edges.get(&skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when every direct prerequisite of `skill` is in `held`.
    pub fn is_eligible(&self, skill: SkillId, held: &HashSet<SkillId>) -> bool {
        self.prerequisites_of(skill)
            .iter()
            .all(|prerequisite| held.contains(prerequisite))
    }

    pub fn missing_prerequisites(&self, skill: SkillId, held: &HashSet<SkillId>) -> Vec<SkillId> {
        self.prerequisites_of(skill)
            .iter()
            .copied()
            .filter(|prerequisite| !held.contains(prerequisite))
            .collect()
    }
}
