use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdError {
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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Malformed template file '{path}': {message}")]
    MalformedTemplateError { path: String, message: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

pub type Result<T> = std::result::Result<T, MdError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Configuration,
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MdError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MdError::IoError(_) => ErrorCategory::Io,
            MdError::SerializationError(_) | MdError::MalformedTemplateError { .. } => {
                ErrorCategory::Format
            }
            MdError::ConfigError { .. }
            | MdError::ConfigValidationError { .. }
            | MdError::InvalidConfigValueError { .. }
            | MdError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MdError::ClipboardError { .. } => ErrorCategory::Platform,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 剪貼簿失敗不影響文件本身
            MdError::ClipboardError { .. } => ErrorSeverity::Medium,
            MdError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MdError::IoError(_) => "Check that the path exists and is readable/writable",
            MdError::SerializationError(_) | MdError::MalformedTemplateError { .. } => {
                "Make sure the file is a JSON object as written by `md-creator init`"
            }
            MdError::ConfigError { .. }
            | MdError::ConfigValidationError { .. }
            | MdError::InvalidConfigValueError { .. }
            | MdError::MissingConfigError { .. } => {
                "Review md-creator.toml or the command line arguments"
            }
            MdError::ClipboardError { .. } => {
                "Install pbcopy, wl-copy, xclip or xsel, or use --output instead"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MdError::IoError(e) => format!("File operation failed: {}", e),
            MdError::SerializationError(e) => format!("Failed to read template: {}", e),
            MdError::MalformedTemplateError { path, message } => {
                format!("Failed to load template {}: {}", path, message)
            }
            MdError::ClipboardError { message } => {
                format!("Failed to copy to clipboard: {}", message)
            }
            other => other.to_string(),
        }
    }
}
