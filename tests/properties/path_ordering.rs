//! Property tests for learning path generation.

use proptest::prelude::*;
use std::collections::HashSet;

use super::fixtures::fixture;
use skillpath::core::{PathStore, SkillId, StepStatus, UserId};
use skillpath::{MemoryStore, PathGenerator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a path holds exactly the missing skills, easiest tier first,
    /// with contiguous "Not Started" steps.
    #[test]
    fn property_path_is_the_ordered_gap(fx in fixture()) {
        let held = fx.held_skills();
        let held_ids: HashSet<SkillId> = fx.held.iter().copied().collect();
        let generator = PathGenerator::new(&fx.catalog);

        for career in &fx.careers {
            let mut store = MemoryStore::default();
            let generated = generator
                .generate(&mut store, UserId(1), Some(career), &held)
                .unwrap();

            let required: HashSet<SkillId> = career.required_skills.iter().copied().collect();
            let gap: HashSet<SkillId> = required.difference(&held_ids).copied().collect();
            prop_assert_eq!(generated.skills.len(), gap.len());
            prop_assert!(generated.skills.iter().all(|s| gap.contains(&s.id)));

            for pair in generated.skills.windows(2) {
                prop_assert!(pair[0].difficulty_rank() <= pair[1].difficulty_rank());
            }

            let stored = store.learning_path(generated.path.id).unwrap().unwrap();
            for (i, step) in stored.steps.iter().enumerate() {
                prop_assert_eq!(step.step_order, i as u32 + 1);
                prop_assert_eq!(step.status, StepStatus::NotStarted);
                prop_assert_eq!(step.skill, generated.skills[i].id);
            }
        }
    }

    /// PROPERTY: holding every required skill gives an empty, zero-step path.
    #[test]
    fn property_full_coverage_gives_empty_path(fx in fixture()) {
        let generator = PathGenerator::new(&fx.catalog);
        let mut store = MemoryStore::default();

        for career in &fx.careers {
            let generated = generator
                .generate(&mut store, UserId(1), Some(career), &fx.skills)
                .unwrap();
            prop_assert!(generated.skills.is_empty());
            prop_assert!(generated.path.steps.is_empty());
        }
        prop_assert_eq!(store.paths_for_user(UserId(1)).unwrap().len(), fx.careers.len());
    }
}
