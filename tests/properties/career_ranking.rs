//! Property tests for career ranking.

use proptest::prelude::*;
use std::collections::HashSet;

use super::fixtures::fixture;
use skillpath::core::SkillId;
use skillpath::CareerMatcher;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ranking is non-increasing by score and equal scores keep catalog order.
    #[test]
    fn property_rank_is_sorted_and_stable(fx in fixture()) {
        let ranked = CareerMatcher::new(&fx.catalog)
            .rank(Some(&fx.domain), &fx.held)
            .unwrap();

        prop_assert_eq!(ranked.len(), fx.careers.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].career.id < pair[1].career.id, "tie reordered: {:?}", pair);
            }
        }
    }

    /// PROPERTY: scores follow the overlap ratio, with 0 for careers requiring nothing.
    #[test]
    fn property_scores_match_overlap(fx in fixture()) {
        let held: HashSet<SkillId> = fx.held.iter().copied().collect();
        let ranked = CareerMatcher::new(&fx.catalog)
            .rank(Some(&fx.domain), &fx.held)
            .unwrap();

        for scored in ranked {
            let required: HashSet<SkillId> = scored.career.required_skills.iter().copied().collect();
            prop_assert_eq!(scored.total_required, required.len());
            prop_assert_eq!(scored.matching_count, required.intersection(&held).count());

            if required.is_empty() {
                prop_assert_eq!(scored.score, 0.0);
            } else if required.is_subset(&held) {
                prop_assert_eq!(scored.score, 1.0);
            } else {
                prop_assert!(scored.score >= 0.0 && scored.score < 1.0);
            }
        }
    }
}
