//! Property tests for next-skill suggestions.

use proptest::prelude::*;
use std::collections::HashSet;

use super::fixtures::fixture;
use skillpath::core::SkillId;
use skillpath::SkillSuggester;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: suggestions are unheld, unblocked, and never exceed the limit.
    #[test]
    fn property_suggestions_are_eligible(fx in fixture(), limit in 0usize..12) {
        let held = fx.held_skills();
        let held_ids: HashSet<SkillId> = fx.held.iter().copied().collect();

        let suggested = SkillSuggester::new(&fx.catalog)
            .suggest(Some(&fx.domain), &held, limit)
            .unwrap();

        prop_assert!(suggested.len() <= limit);
        for skill in &suggested {
            prop_assert!(!held_ids.contains(&skill.id));
            prop_assert!(skill.prerequisites.iter().all(|p| held_ids.contains(p)));
        }
    }

    /// PROPERTY: suggestions keep catalog order.
    #[test]
    fn property_suggestions_keep_catalog_order(fx in fixture()) {
        let held = fx.held_skills();
        let suggested = SkillSuggester::new(&fx.catalog)
            .suggest(Some(&fx.domain), &held, usize::MAX)
            .unwrap();

        for pair in suggested.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }
    }
}
