use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillPathError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No profile found for user {user}")]
    MissingProfile { user: u64 },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Catalog validation error: {message}")]
    CatalogValidation { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl SkillPathError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingProfile { .. } => {
                "You have not set up a profile yet, so there are no skills to compare against."
                    .to_string()
            }
            Self::NotFound { kind, id } => format!("Could not find {} with id {}.", kind, id),
            Self::InvalidInput { message } => message.clone(),
            Self::CatalogValidation { message } => format!("The skill catalog is invalid: {}", message),
            Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => format!("Configuration problem: {}", self),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingProfile { .. } => "Run `skillpath profile --user <id> --domain <id> --skills <ids>` first",
            Self::InvalidInput { .. } => "Check that the profile has a domain and the ids you passed exist",
            Self::NotFound { .. } => "List available records with `skillpath domains` or `skillpath skills`",
            Self::CatalogValidation { .. } | Self::Toml(_) => {
                "Fix the catalog file so every id is unique and every reference resolves"
            }
            Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => "Check skillpath.toml and the command line flags",
            Self::Storage { .. } | Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => {
                "Check that the data directory exists and is writable"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } | Self::MissingProfile { .. } | Self::NotFound { .. } => 2,
            Self::CatalogValidation { .. }
            | Self::ConfigValidation { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. }
            | Self::Toml(_) => 1,
            Self::Storage { .. } | Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillPathError>;
