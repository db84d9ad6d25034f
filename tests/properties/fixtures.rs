//! Random catalogs: one domain, up to 16 skills with random tiers and
//! prerequisites, up to 6 careers, and a random held-skill subset.

use proptest::prelude::*;
use skillpath::core::{Career, CareerId, DifficultyLevel, Domain, DomainId, Skill, SkillId};
use skillpath::InMemoryCatalog;

#[derive(Debug, Clone)]
pub struct Fixture {
    pub catalog: InMemoryCatalog,
    pub domain: Domain,
    pub skills: Vec<Skill>,
    pub careers: Vec<Career>,
    pub held: Vec<SkillId>,
}

impl Fixture {
    pub fn held_skills(&self) -> Vec<Skill> {
        self.skills
            .iter()
            .filter(|s| self.held.contains(&s.id))
            .cloned()
            .collect()
    }
}

fn difficulty(tier: u8) -> Option<DifficultyLevel> {
    match tier {
        0 => Some(DifficultyLevel::Beginner),
        1 => Some(DifficultyLevel::Intermediate),
        2 => Some(DifficultyLevel::Advanced),
        _ => None,
    }
}

pub fn fixture() -> impl Strategy<Value = Fixture> {
    (1u64..16)
        .prop_flat_map(|n| {
            (
                prop::collection::vec((0u8..4, prop::collection::vec(0..n, 0..3)), n as usize),
                prop::collection::vec(prop::collection::vec(0..n, 0..6), 0..6),
                prop::collection::vec(0..n, 0..n as usize),
            )
        })
        .prop_map(|(skill_specs, career_specs, held)| {
            let domain = Domain {
                id: DomainId(1),
                name: "Generated".to_string(),
                description: String::new(),
            };

            let skills: Vec<Skill> = skill_specs
                .into_iter()
                .enumerate()
                .map(|(i, (tier, prerequisites))| Skill {
                    id: SkillId(i as u64),
                    name: format!("skill-{}", i),
                    domain: domain.id,
                    description: String::new(),
                    difficulty: difficulty(tier),
                    prerequisites: prerequisites
                        .into_iter()
                        .filter(|p| *p != i as u64)
                        .map(SkillId)
                        .collect(),
                })
                .collect();

            let careers: Vec<Career> = career_specs
                .into_iter()
                .enumerate()
                .map(|(i, required)| Career {
                    id: CareerId(i as u64),
                    title: format!("career-{}", i),
                    domain: domain.id,
                    description: String::new(),
                    required_skills: required.into_iter().map(SkillId).collect(),
                    average_salary: None,
                })
                .collect();

            let catalog = InMemoryCatalog::new(vec![domain.clone()], skills.clone(), careers.clone());

            Fixture {
                catalog,
                domain,
                skills,
                careers,
                held: held.into_iter().map(SkillId).collect(),
            }
        })
}
