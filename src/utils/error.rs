use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl PortfolioError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PortfolioError::ConfigValidationError { .. }
                | PortfolioError::InvalidConfigValueError { .. }
                | PortfolioError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::ApiError(_) | PortfolioError::ApiStatusError { .. } => {
                "Could not reach the certificate data source".to_string()
            }
            PortfolioError::SerializationError(_) => {
                "The data source returned rows in an unexpected shape".to_string()
            }
            PortfolioError::IoError(e) => format!("File access failed: {}", e),
            PortfolioError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            PortfolioError::ConfigValidationError { field, message } => {
                format!("Invalid setting {}: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::ApiError(_) => "Check the network connection and the Supabase URL",
            PortfolioError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key is the project's anon key"
            }
            PortfolioError::ApiStatusError { status: 404, .. } => {
                "Check the table name and that the table is exposed through the REST API"
            }
            PortfolioError::ApiStatusError { .. } => "Retry later or inspect the Supabase logs",
            PortfolioError::SerializationError(_) => {
                "Make sure the table has id, title, img and link columns"
            }
            PortfolioError::IoError(_) => "Check that the file exists and is readable",
            PortfolioError::MissingConfigError { .. } => {
                "Pass it as a flag, set SUPABASE_URL/SUPABASE_ANON_KEY, or use --config"
            }
            PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::ConfigValidationError { .. } => "Fix the configuration value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        let missing = PortfolioError::MissingConfigError {
            field: "source.url".to_string(),
        };
        assert!(missing.is_config_error());
        assert!(missing.user_friendly_message().contains("source.url"));

        let status = PortfolioError::ApiStatusError {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(!status.is_config_error());
        assert_eq!(status.to_string(), "API returned status 500: boom");
    }

    #[test]
    fn test_validation_errors_are_config_errors() {
        let invalid = PortfolioError::InvalidConfigValueError {
            field: "source.timeout_seconds".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        let unparsable = PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected a table".to_string(),
        };
        assert!(invalid.is_config_error());
        assert!(unparsable.is_config_error());
        assert_eq!(
            invalid.user_friendly_message(),
            "Invalid setting source.timeout_seconds: Value must be at least 1"
        );
        assert!(!PortfolioError::IoError(std::io::Error::other("gone")).is_config_error());
    }

    #[test]
    fn test_recovery_suggestion_depends_on_status() {
        let unauthorized = PortfolioError::ApiStatusError {
            status: 401,
            body: String::new(),
        };
        assert!(unauthorized.recovery_suggestion().contains("anon key"));

        let not_found = PortfolioError::ApiStatusError {
            status: 404,
            body: String::new(),
        };
        assert!(not_found.recovery_suggestion().contains("table name"));
    }
}
