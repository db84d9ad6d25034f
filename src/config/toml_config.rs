use crate::core::suggestions::DEFAULT_SUGGESTION_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SkillPathError};
use crate::utils::validation::{validate_one_of, validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub suggestion_limit: Option<usize>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: Some(DEFAULT_SUGGESTION_LIMIT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| SkillPathError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Defaults used when no config file exists.
    pub fn with_catalog(path: impl Into<String>) -> Self {
        Self {
            catalog: CatalogConfig { path: path.into() },
            storage: StorageConfig::default(),
            recommendation: RecommendationConfig::default(),
            logging: None,
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for AppConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn suggestion_limit(&self) -> usize {
        self.recommendation
            .suggestion_limit
            .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog.path)?;
        validate_path("storage.data_dir", &self.storage.data_dir)?;

        if let Some(limit) = self.recommendation.suggestion_limit {
            validate_positive_number("recommendation.suggestion_limit", limit, 1)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &["compact", "json"])?;
            }
            if let Some(level) = &logging.level {
                validate_one_of(
                    "logging.level",
                    level,
                    &["error", "warn", "info", "debug", "trace"],
                )?;
            }
        }

        Ok(())
    }
}
