use thiserror::Error;

#[derive(Error, Debug)]
pub enum BabyNamesError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {message}")]
    ParseError { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Io,
    Parse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BabyNamesError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. } | Self::InvalidConfigValueError { .. } => ErrorCategory::Usage,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } => ErrorCategory::Parse,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the binary. Usage mirrors clap's own status.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            ErrorCategory::Parse => 1,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", path),
                _ => format!("Could not access {}: {}", path, source),
            },
            Self::ParseError { path, message } => format!("Could not parse {}: {}", path, message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UsageError { .. } => "Pass one or more report files, e.g. `babynames baby1990.html`",
            Self::InvalidConfigValueError { .. } => "Check the file arguments for empty or malformed paths",
            Self::IoError { .. } => "Check that the file exists and that its directory is readable and writable",
            Self::ParseError { .. } => {
                "Make sure the file is a baby-name report containing a 'Popularity in YYYY' heading"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BabyNamesError>;
