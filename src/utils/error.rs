use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown social platform '{name}' in '{field}'")]
    UnknownPlatformError { field: String, name: String },

    #[error("Page {page} is out of range (1..={total_pages})")]
    PaginationError { page: usize, total_pages: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Validation,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::IoError(_) => ErrorCategory::Io,
            ConfigError::TomlParseError(_) => ErrorCategory::Parsing,
            ConfigError::TomlSerializeError(_) | ConfigError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            ConfigError::ConfigValidationError { .. }
            | ConfigError::InvalidConfigValueError { .. }
            | ConfigError::UnknownPlatformError { .. } => ErrorCategory::Validation,
            ConfigError::PaginationError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parsing | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Rendering => match self {
                ConfigError::PaginationError { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConfigError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            ConfigError::TomlParseError(_) => {
                "Check the TOML syntax and the [site] section of the config file".to_string()
            }
            ConfigError::TomlSerializeError(_) | ConfigError::SerializationError(_) => {
                "Try a different export format".to_string()
            }
            ConfigError::ConfigValidationError { field, .. }
            | ConfigError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            ConfigError::UnknownPlatformError { .. } => format!(
                "Use one of the supported platforms: {}",
                crate::domain::model::SocialPlatform::all()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ConfigError::PaginationError { total_pages, .. } => {
                format!("Request a page between 1 and {}", total_pages)
            }
        }
    }

    /// Process exit code for the CLI: load, parse and validation failures
    /// exit 1, export failures exit 2.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Parsing | ErrorCategory::Validation => 1,
            ErrorCategory::Rendering => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::IoError(e) => format!("Could not read the configuration: {}", e),
            ConfigError::TomlParseError(_) => "The configuration file is not valid TOML".to_string(),
            ConfigError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ConfigError::UnknownPlatformError { field, name } => {
                format!("'{}' in '{}' is not a supported social platform", name, field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
