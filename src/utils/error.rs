use thiserror::Error;

/// Failures raised by a [`SaleStore`](crate::domain::ports::SaleStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid month provided ({}). Month must be between 1 and 12.", .value.as_deref().unwrap_or("none"))]
    InvalidMonth { value: Option<String> },

    #[error("Invalid {field} provided ({value}). Must be a positive integer.")]
    InvalidPagination { field: &'static str, value: String },

    #[error("Query failed while {operation}: {source}")]
    QueryError {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Bulk load failed: {message}")]
    BulkLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

impl AnalyticsError {
    pub fn query(operation: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AnalyticsError::QueryError { operation, source }
    }

    pub fn bulk_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AnalyticsError::BulkLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status the boundary should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyticsError::InvalidPagination { .. } => 400,
            _ => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyticsError::InvalidMonth { .. } => {
                "Invalid month provided. Month must be between 1 and 12.".to_string()
            }
            AnalyticsError::InvalidPagination { field, .. } => {
                format!("Invalid {}. Must be a positive integer.", field)
            }
            AnalyticsError::QueryError { operation, .. } => {
                format!("Error {}", operation)
            }
            AnalyticsError::BulkLoadError { .. } => "Error initializing database".to_string(),
            AnalyticsError::IoError(_) => "File system operation failed".to_string(),
            AnalyticsError::ConfigError { message } => format!("Configuration problem: {}", message),
            AnalyticsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidMonth { .. } => "Pass month as an integer from 1 to 12",
            AnalyticsError::InvalidPagination { .. } => "Use page >= 1 and limit >= 1",
            AnalyticsError::QueryError { .. } => "Check that the data file is readable and retry",
            AnalyticsError::BulkLoadError { .. } => {
                "Verify the seed URL is reachable and returns a JSON array of sale records"
            }
            AnalyticsError::IoError(_) => "Check file permissions and available disk space",
            AnalyticsError::ConfigError { .. } | AnalyticsError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
        }
    }
}
