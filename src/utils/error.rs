use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::CategoryNotFound { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::CategoryNotFound { category_id } => {
                format!("No category exists with id {}", category_id)
            }
            CatalogError::IoError(e) => format!("Could not read a required file: {}", e),
            CatalogError::SerializationError(e) => {
                format!("Could not render the catalog as JSON: {}", e)
            }
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::CategoryNotFound { .. } => {
                "Check the category id against the catalog file in use"
            }
            CatalogError::IoError(_) => "Check that the catalog file exists and is readable",
            CatalogError::SerializationError(_) => "Inspect the catalog data for invalid values",
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the catalog file or command line flags and try again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::CategoryNotFound { .. } => 4,
            _ => 1,
        }
    }
}
