use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Base64 decoding failed: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Asset '{name}' could not be decoded: {reason}")]
    AssetDecodeError { name: String, reason: String },

    #[error("Asset '{name}' rejected: {reason}")]
    AssetRejectedError { name: String, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Asset,
    Packaging,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed at this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

/// The one notice shown to the user when packaging fails.
pub const EXPORT_FAILURE_NOTICE: &str = "Error creating portfolio. Please try again.";

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::ConfigValidationError { .. }
            | ExportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ExportError::AssetRejectedError { .. } => ErrorCategory::Asset,
            ExportError::AssetDecodeError { .. }
            | ExportError::DecodeError(_)
            | ExportError::ZipError(_) => ErrorCategory::Packaging,
            ExportError::IoError(_) => ErrorCategory::Io,
            ExportError::SerializationError(_) | ExportError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Asset => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Packaging => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Message suitable for showing to the person running the export.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Packaging | ErrorCategory::Io => EXPORT_FAILURE_NOTICE.to_string(),
            ErrorCategory::Asset => match self {
                ExportError::AssetRejectedError { reason, .. } => reason.clone(),
                other => other.to_string(),
            },
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Portfolio data could not be read: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExportError::ConfigValidationError { .. } => {
                "Check the TOML configuration file for syntax errors"
            }
            ExportError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value and run again"
            }
            ExportError::AssetRejectedError { .. } => {
                "Use a supported file type within the size limit"
            }
            ExportError::AssetDecodeError { .. } | ExportError::DecodeError(_) => {
                "Re-upload the file; its embedded data is damaged"
            }
            ExportError::ZipError(_) => "Try the export again",
            ExportError::IoError(_) => "Check that the output directory exists and is writable",
            ExportError::SerializationError(_) => {
                "Validate the portfolio JSON against the expected shape"
            }
            ExportError::ProcessingError { .. } => "Check the input and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
