use crate::core::{CatalogStore, LearningPath};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes one CSV row per step: order, skill id, skill name, difficulty, status.
pub fn write_path_csv<W, C>(writer: W, path: &LearningPath, catalog: &C) -> Result<()>
where
    W: Write,
    C: CatalogStore + ?Sized,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["step_order", "skill_id", "skill", "difficulty", "status"])?;

    for step in &path.steps {
        let skill = catalog.skill(step.skill)?;
        let (name, difficulty) = match &skill {
            Some(skill) => (skill.name.as_str(), skill.difficulty_label()),
            None => ("(unknown skill)", ""),
        };

        csv_writer.write_record([
            step.step_order.to_string().as_str(),
            step.skill.to_string().as_str(),
            name,
            difficulty,
            step.status.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_path_csv<P, C>(output: P, path: &LearningPath, catalog: &C) -> Result<()>
where
    P: AsRef<Path>,
    C: CatalogStore + ?Sized,
{
    let output = output.as_ref();
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(output)?;
    write_path_csv(file, path, catalog)?;
    tracing::info!("Exported learning path {} to {}", path.id, output.display());
    Ok(())
}
