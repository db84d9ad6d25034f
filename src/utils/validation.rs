use crate::utils::error::{Result, SkillPathError};
use std::collections::HashSet;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkillPathError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SkillPathError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SkillPathError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SkillPathError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_name(kind: &str, id: u64, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SkillPathError::CatalogValidation {
            message: format!("{} {} has an empty name", kind, id),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<I, T>(kind: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(SkillPathError::CatalogValidation {
                message: format!("duplicate {} id {}", kind, id),
            });
        }
        seen.insert(id);
    }
    Ok(())
}
