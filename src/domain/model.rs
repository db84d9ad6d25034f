use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! record_id {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub u64);

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<u64> for $name {
                fn from(value: u64) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

record_id!(DomainId, SkillId, CareerId, UserId, LearningPathId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Difficulty tier of a skill. Ordered Beginner < Intermediate < Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown labels become `None` instead of failing the whole catalog load.
fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<DifficultyLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(DifficultyLevel::parse))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub domain: DomainId,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<DifficultyLevel>,
    #[serde(default)]
    pub prerequisites: Vec<SkillId>,
}

impl Skill {
    /// Sort rank of the skill's tier; a missing tier ranks as Intermediate.
    pub fn difficulty_rank(&self) -> u8 {
        self.difficulty
            .unwrap_or(DifficultyLevel::Intermediate)
            .rank()
    }

    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(|d| d.as_str()).unwrap_or("Unspecified")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: CareerId,
    pub title: String,
    pub domain: DomainId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<SkillId>,
    #[serde(default)]
    pub average_salary: Option<String>,
}

impl Career {
    /// Required skill ids with duplicates removed, keeping declaration order.
    pub fn distinct_required_skills(&self) -> Vec<SkillId> {
        let mut seen = std::collections::HashSet::new();
        self.required_skills
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub domain: Option<DomainId>,
    #[serde(default)]
    pub skills: Vec<SkillId>,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl StepStatus {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "not started" => Some(Self::NotStarted),
            "in progress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub skill: SkillId,
    pub step_order: u32,
    #[serde(default)]
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: LearningPathId,
    pub user: UserId,
    pub career: Option<CareerId>,
    #[serde(default)]
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub steps: Vec<PathStep>,
}

impl LearningPath {
    /// Fraction of completed steps. A path with no steps reports 0.
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let completed = self
            .steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count();
        completed as f64 / self.steps.len() as f64
    }
}

/// A career scored against a user's skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCareer {
    pub career: Career,
    pub score: f64,
    pub matching_count: usize,
    pub total_required: usize,
}

impl ScoredCareer {
    pub fn match_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}
