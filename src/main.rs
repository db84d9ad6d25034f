use anyhow::Context;
use clap::Parser;
use skillpath::config::cli::{skill_ids, Command};
use skillpath::core::{
    CareerId, CatalogStore, ConfigProvider, DomainId, LearningPathId, PathStore, ProfileStore,
    Skill, UserId, UserProfile,
};
use skillpath::utils::{logger, validation::Validate};
use skillpath::{
    load_catalog, AppConfig, Cli, GeneratedPath, InMemoryCatalog, LocalStore, RecommendationEngine,
    SkillPathError,
};

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    if let Err(e) = run(&cli, &config) {
        match e.downcast_ref::<SkillPathError>() {
            Some(err) => {
                tracing::error!("❌ {} (exit code {})", err, err.exit_code());
                fail(err)
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn fail(err: &SkillPathError) -> ! {
    eprintln!("❌ {}", err.user_friendly_message());
    eprintln!("💡 {}", err.recovery_suggestion());
    std::process::exit(err.exit_code());
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(config.catalog_path())?;
    let mut store = LocalStore::open(config.data_dir())?;
    let engine = RecommendationEngine::new(&catalog).with_suggestion_limit(config.suggestion_limit());

    match &cli.command {
        Command::Domains => {
            for domain in catalog.domains()? {
                println!("{}. {}", domain.id, domain.name);
                if !domain.description.is_empty() {
                    println!("   {}", domain.description);
                }
            }
        }

        Command::Skills { domain } => {
            let domain = require_domain(&catalog, DomainId(*domain))?;
            println!("Skills in {}:", domain.name);
            for skill in catalog.skills_by_domain(domain.id)? {
                println!("[{}] {} ({})", skill.id, skill.name, skill.difficulty_label());
                let prerequisites = catalog.prerequisites(&skill)?;
                if !prerequisites.is_empty() {
                    println!("    Prereqs: {}", names(&prerequisites));
                }
            }
        }

        Command::Profile {
            user,
            username,
            domain,
            skills,
        } => {
            let domain = require_domain(&catalog, DomainId(*domain))?;
            let skills = skill_ids(skills);
            for id in &skills {
                if catalog.skill(*id)?.is_none() {
                    return Err(SkillPathError::NotFound {
                        kind: "skill",
                        id: id.0,
                    }
                    .into());
                }
            }

            let profile = UserProfile {
                user: UserId(*user),
                username: username.clone().unwrap_or_else(|| format!("user{}", user)),
                domain: Some(domain.id),
                skills,
                bio: String::new(),
            };
            store.save_profile(profile)?;
            tracing::info!("Saved profile for user {}", user);
            println!("✅ Profile saved ({} in {})", user, domain.name);
        }

        Command::Recommend { user } => {
            let ranked = engine.recommend_for_user(&store, UserId(*user))?;
            if ranked.is_empty() {
                println!("No matching careers found.");
            }
            for (i, scored) in ranked.iter().enumerate() {
                let career = &scored.career;
                println!("{}. {}", i + 1, career.title);
                println!(
                    "   Score {:.2} - {}/{} skills ({}%)",
                    scored.score,
                    scored.matching_count,
                    scored.total_required,
                    scored.match_percent()
                );
                if let Some(salary) = &career.average_salary {
                    println!("   Salary: {}", salary);
                }
                if !career.description.is_empty() {
                    println!("   {}", career.description);
                }
            }
        }

        Command::Path {
            user,
            career,
            export,
        } => {
            let profile = engine.profile(&store, UserId(*user))?;
            let generated = match career {
                Some(career) => engine.generate_for_profile(&mut store, &profile, CareerId(*career))?,
                None => match engine.generate_for_top_career(&mut store, &profile)? {
                    Some((top, generated)) => {
                        println!("Top career: {}\n", top.career.title);
                        generated
                    }
                    None => {
                        println!("No career recommendations to build a path.");
                        return Ok(());
                    }
                },
            };

            print_generated(&engine, &generated, &profile)?;

            if let Some(output) = export {
                skillpath::adapters::export::export_path_csv(output, &generated.path, &catalog)
                    .with_context(|| format!("exporting learning path to {}", output))?;
                println!("📁 Exported to {}", output);
            }
        }

        Command::Paths { user } => {
            let paths = store.paths_for_user(UserId(*user))?;
            if paths.is_empty() {
                println!("No learning paths yet.");
            }
            for path in paths {
                println!(
                    "#{} {} ({} steps, {:.0}% complete, created {})",
                    path.id,
                    path.title,
                    path.steps.len(),
                    path.progress() * 100.0,
                    path.created_at.format("%Y-%m-%d")
                );
                for step in &path.steps {
                    let name = catalog
                        .skill(step.skill)?
                        .map(|s| s.name)
                        .unwrap_or_else(|| format!("skill {}", step.skill));
                    println!("   {}. {} [{}]", step.step_order, name, step.status);
                }
            }
        }

        Command::Suggest { user, limit } => {
            let suggested = engine.suggest_for_user(&store, UserId(*user), *limit)?;
            if suggested.is_empty() {
                println!("No eligible skills to suggest.");
            }
            for skill in suggested {
                println!("- {} ({})", skill.name, skill.difficulty_label());
            }
        }

        Command::Progress { path, step, status } => {
            let updated = store.update_step_status(LearningPathId(*path), *step, *status)?;
            tracing::info!("Path {} step {} is now {}", path, step, updated.status);

            if let Some(learning_path) = store.learning_path(LearningPathId(*path))? {
                println!(
                    "✅ Step {} marked {} ({:.0}% of '{}' complete)",
                    updated.step_order,
                    updated.status,
                    learning_path.progress() * 100.0,
                    learning_path.title
                );
            }
        }
    }

    Ok(())
}

fn require_domain(catalog: &InMemoryCatalog, id: DomainId) -> skillpath::Result<skillpath::core::Domain> {
    catalog
        .domain(id)?
        .ok_or(SkillPathError::NotFound {
            kind: "domain",
            id: id.0,
        })
}

fn names(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_generated(
    engine: &RecommendationEngine<'_, InMemoryCatalog>,
    generated: &GeneratedPath,
    profile: &UserProfile,
) -> skillpath::Result<()> {
    println!("Learning path #{}: {}", generated.path.id, generated.path.title);
    if generated.skills.is_empty() {
        println!("You already have every required skill.");
        return Ok(());
    }

    for (step, skill) in generated.path.steps.iter().zip(&generated.skills) {
        println!("{}. {} - {}", step.step_order, skill.name, skill.difficulty_label());
        let blocked = engine.blocked_by(skill, &profile.skills)?;
        if !blocked.is_empty() {
            println!("    Needs first: {}", names(&blocked));
        }
    }
    Ok(())
}
