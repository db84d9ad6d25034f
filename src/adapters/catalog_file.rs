use crate::adapters::memory::InMemoryCatalog;
use crate::core::{Career, Domain, DomainId, Skill, SkillId};
use crate::utils::error::{Result, SkillPathError};
use crate::utils::validation::{validate_non_empty_name, validate_unique_ids, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// On-disk catalog: `[[domains]]`, `[[skills]]` and `[[careers]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub careers: Vec<Career>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_catalog(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.domains, self.skills, self.careers)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        validate_unique_ids("domain", self.domains.iter().map(|d| d.id))?;
        validate_unique_ids("skill", self.skills.iter().map(|s| s.id))?;
        validate_unique_ids("career", self.careers.iter().map(|c| c.id))?;

        let domain_ids: HashSet<DomainId> = self.domains.iter().map(|d| d.id).collect();
        let skill_ids: HashSet<SkillId> = self.skills.iter().map(|s| s.id).collect();

        for domain in &self.domains {
            validate_non_empty_name("domain", domain.id.0, &domain.name)?;
        }

        for skill in &self.skills {
            validate_non_empty_name("skill", skill.id.0, &skill.name)?;
            if !domain_ids.contains(&skill.domain) {
                return Err(SkillPathError::CatalogValidation {
                    message: format!("skill {} belongs to unknown domain {}", skill.id, skill.domain),
                });
            }
            if let Some(missing) = skill.prerequisites.iter().find(|p| !skill_ids.contains(p)) {
                return Err(SkillPathError::CatalogValidation {
                    message: format!("skill {} lists unknown prerequisite {}", skill.id, missing),
                });
            }
        }

        for career in &self.careers {
            validate_non_empty_name("career", career.id.0, &career.title)?;
            if !domain_ids.contains(&career.domain) {
                return Err(SkillPathError::CatalogValidation {
                    message: format!("career {} belongs to unknown domain {}", career.id, career.domain),
                });
            }
            if let Some(missing) = career.required_skills.iter().find(|s| !skill_ids.contains(s)) {
                return Err(SkillPathError::CatalogValidation {
                    message: format!("career {} requires unknown skill {}", career.id, missing),
                });
            }
        }

        Ok(())
    }
}

/// Reads, validates and snapshots a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    tracing::debug!("Loading catalog from {}", path.display());

    let file = CatalogFile::from_file(path)?;
    file.validate()?;

    tracing::info!(
        "Loaded catalog: {} domains, {} skills, {} careers",
        file.domains.len(),
        file.skills.len(),
        file.careers.len()
    );
    Ok(file.into_catalog())
}
