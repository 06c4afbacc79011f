use thiserror::Error;

#[derive(Error, Debug)]
pub enum PtaError {
    #[error("Invalid weight code: {code} (weight codes must be non-negative)")]
    InvalidWeightCode { code: i64 },

    #[error("Fraction table lookup failed for code {code}: {reason}")]
    TableLookupError { code: i64, reason: String },

    #[error("Degenerate weighting: no explicit weight contributes to the result")]
    DegenerateWeighting,

    #[error("Overcommitted weighting: explicit weights {assigned} exceed the whole {denominator}")]
    OvercommittedWeighting { assigned: u64, denominator: u64 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Export request returned {status}: {body}")]
    ExportStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Weighting,
    Network,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PtaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PtaError::InvalidWeightCode { .. }
            | PtaError::TableLookupError { .. }
            | PtaError::DegenerateWeighting
            | PtaError::OvercommittedWeighting { .. } => ErrorCategory::Weighting,
            PtaError::ApiError(_) | PtaError::ExportStatusError { .. } => ErrorCategory::Network,
            PtaError::IoError(_) | PtaError::SerializationError(_) => ErrorCategory::Storage,
            PtaError::ConfigValidationError { .. }
            | PtaError::InvalidConfigValueError { .. }
            | PtaError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PtaError::DegenerateWeighting => ErrorSeverity::Low,
            PtaError::ApiError(_) => ErrorSeverity::Medium,
            PtaError::ExportStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            PtaError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PtaError::InvalidWeightCode { .. } => {
                "Use 0 for no weight, 1-100 for a percentage or 101+ for a fraction table entry".to_string()
            }
            PtaError::TableLookupError { .. } => {
                "Check the [fractions] entries in the configuration file; each entry must look like '1/3'".to_string()
            }
            PtaError::DegenerateWeighting => {
                "Assign a non-zero weight to at least one explicit component".to_string()
            }
            PtaError::OvercommittedWeighting { .. } => {
                "Lower the explicit weights so they add up to at most 100%".to_string()
            }
            PtaError::ApiError(_) => {
                "Check the network connection and the export endpoint, then retry".to_string()
            }
            PtaError::ExportStatusError { status, .. } => match status {
                401 | 403 => "Check the TOKEN environment variable or the --token flag".to_string(),
                400 => "Check the year and klas parameters".to_string(),
                _ => "The export service reported an error; retry later".to_string(),
            },
            PtaError::IoError(_) => "Check that the output directory is writable".to_string(),
            PtaError::SerializationError(_) => "Report this as a bug".to_string(),
            PtaError::ConfigValidationError { field, .. }
            | PtaError::InvalidConfigValueError { field, .. }
            | PtaError::MissingConfigError { field } => {
                format!("Fix '{}' in the configuration file or pass it on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PtaError::InvalidWeightCode { code } => format!("Weight code {} is not valid", code),
            PtaError::TableLookupError { code, .. } => {
                format!("Weight code {} does not refer to a usable fraction", code)
            }
            PtaError::DegenerateWeighting => "The weights do not describe any weighting".to_string(),
            PtaError::OvercommittedWeighting { .. } => {
                "The weights add up to more than the whole".to_string()
            }
            PtaError::ApiError(_) => "Could not reach the export service".to_string(),
            PtaError::ExportStatusError { status, .. } => {
                format!("The export service refused the request (HTTP {})", status)
            }
            PtaError::IoError(e) => format!("File operation failed: {}", e),
            PtaError::SerializationError(_) => "Could not serialize the result".to_string(),
            PtaError::ConfigValidationError { .. }
            | PtaError::InvalidConfigValueError { .. }
            | PtaError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PtaError>;
