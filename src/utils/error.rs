use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridIconError {
    #[error("computed icon size {computed}px < min-size {required}px")]
    ComputedSizeTooSmall { computed: u32, required: u32 },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Geometry,
    Filesystem,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl GridIconError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GridIconError::ComputedSizeTooSmall { .. } => ErrorCategory::Geometry,
            GridIconError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GridIconError::WriteError { .. } | GridIconError::CreateDirError { .. } => {
                ErrorCategory::Filesystem
            }
            GridIconError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Geometry => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的單行訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GridIconError::ComputedSizeTooSmall { .. } => format!("ERROR: {}.", self),
            GridIconError::WriteError { path, source } => {
                format!("ERROR: could not write {}: {}", path.display(), source)
            }
            GridIconError::CreateDirError { path, source } => {
                format!("ERROR: could not create {}: {}", path.display(), source)
            }
            GridIconError::SerializationError(e) => {
                format!("ERROR: could not serialize the run plan: {}", e)
            }
            GridIconError::InvalidConfigValueError { field, value, reason } => {
                format!("ERROR: --{} {}: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GridIconError::ComputedSizeTooSmall { .. } => {
                "Use fewer rows/columns, raise --max-size, or lower --min-size"
            }
            GridIconError::WriteError { .. } | GridIconError::CreateDirError { .. } => {
                "Check that the output directory exists and is writable"
            }
            GridIconError::SerializationError(_) => "Re-run without --dry-run",
            GridIconError::InvalidConfigValueError { .. } => {
                "Sizes and grid dimensions must be at least 1; --output-dir must name a directory"
            }
        }
    }

    /// 依嚴重程度對應的行程結束碼，一律非 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridIconError>;
