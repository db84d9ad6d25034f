use crate::config::toml_config::AppConfig;
use crate::core::{SkillId, StepStatus};
use crate::utils::error::{Result, SkillPathError};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "skillpath")]
#[command(about = "Career recommendations and learning paths from a skill catalog")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "skillpath.toml")]
    pub config: String,

    /// Catalog file, overrides catalog.path
    #[arg(long)]
    pub catalog: Option<String>,

    /// Directory for profiles and learning paths, overrides storage.data_dir
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List domains in the catalog
    Domains,

    /// List a domain's skills with tiers and prerequisites
    Skills {
        #[arg(long)]
        domain: u64,
    },

    /// Create or replace a user's profile
    Profile {
        #[arg(long)]
        user: u64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        domain: u64,
        /// Comma separated skill ids
        #[arg(long, value_delimiter = ',')]
        skills: Vec<u64>,
    },

    /// Rank careers in the user's domain
    Recommend {
        #[arg(long)]
        user: u64,
    },

    /// Generate a learning path (defaults to the top ranked career)
    Path {
        #[arg(long)]
        user: u64,
        #[arg(long)]
        career: Option<u64>,
        /// Also write the path to this CSV file
        #[arg(long)]
        export: Option<String>,
    },

    /// List a user's learning paths with progress
    Paths {
        #[arg(long)]
        user: u64,
    },

    /// Skills the user can start next
    Suggest {
        #[arg(long)]
        user: u64,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Update the status of one step of a learning path
    Progress {
        #[arg(long)]
        path: u64,
        #[arg(long)]
        step: u32,
        /// not-started, in-progress or completed
        #[arg(long, value_parser = parse_status)]
        status: StepStatus,
    },
}

fn parse_status(value: &str) -> std::result::Result<StepStatus, String> {
    StepStatus::parse(value)
        .ok_or_else(|| format!("unknown status '{}': use not-started, in-progress or completed", value))
}

impl Cli {
    /// Loads the config file (or falls back to defaults when it does not
    /// exist) and applies command line overrides.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = if Path::new(&self.config).exists() {
            AppConfig::from_file(&self.config)?
        } else {
            match &self.catalog {
                Some(catalog) => AppConfig::with_catalog(catalog.clone()),
                None => {
                    return Err(SkillPathError::MissingConfig {
                        field: format!("{} (or --catalog)", self.config),
                    })
                }
            }
        };

        if let Some(catalog) = &self.catalog {
            config.catalog.path = catalog.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        Ok(config)
    }
}

pub fn skill_ids(ids: &[u64]) -> Vec<SkillId> {
    ids.iter().copied().map(SkillId).collect()
}
