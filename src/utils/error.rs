use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Database query failed: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Cannot connect to results store: {message}")]
    ConnectionError { message: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid season '{input}': {reason}")]
    InvalidSeasonError { input: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Store,
    Configuration,
    Input,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::DatabaseError(_) | DashboardError::ConnectionError { .. } => {
                ErrorCategory::Store
            }
            DashboardError::ConfigError { .. }
            | DashboardError::MissingConfigError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::InvalidSeasonError { .. } => ErrorCategory::Input,
            DashboardError::ZipError(_)
            | DashboardError::IoError(_)
            | DashboardError::SerializationError(_) => ErrorCategory::Output,
            DashboardError::CsvError(_) | DashboardError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 連線失敗視為致命的配置錯誤，不重試
            DashboardError::ConnectionError { .. } => ErrorSeverity::Critical,
            DashboardError::DatabaseError(_) => ErrorSeverity::Medium,
            DashboardError::InvalidSeasonError { .. } => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::ConnectionError { .. } => {
                "Could not reach the F1 results database".to_string()
            }
            DashboardError::DatabaseError(_) => "A query against the results database failed".to_string(),
            DashboardError::InvalidSeasonError { input, .. } => {
                format!("'{}' is not a valid season year", input)
            }
            DashboardError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DashboardError::ConfigError { message } => format!("Configuration problem: {}", message),
            DashboardError::ZipError(_) | DashboardError::IoError(_) => {
                "Could not write the report bundle".to_string()
            }
            DashboardError::CsvError(_) => "Could not read or write CSV data".to_string(),
            DashboardError::SerializationError(_) => "Could not serialize the report".to_string(),
            DashboardError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Store => {
                "Check DB_HOST, DB_PORT, DB_USER, DB_PASSWORD and DB_NAME, and that the database is running"
            }
            ErrorCategory::Configuration => "Review the [database] and [output] sections of the config file",
            ErrorCategory::Input => "Pass the season as a four digit year, e.g. --season 2021",
            ErrorCategory::Output => "Make sure the output path exists and is writable",
            ErrorCategory::Processing => "Inspect the input rows for malformed values",
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
