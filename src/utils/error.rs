use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to read file '{path}': {source}", path = path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `endpoint` is the redacted URL; `source` has had its URL stripped.
    #[error("API request to {endpoint} failed: {source}")]
    TransportError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
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
    File,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl NotifyError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotifyError::FileError {
            path: path.into(),
            source,
        }
    }

    /// Wrap a transport failure, dropping the request URL (it embeds the token).
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        NotifyError::TransportError {
            endpoint: endpoint.into(),
            source: source.without_url(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NotifyError::FileError { .. } => ErrorCategory::File,
            NotifyError::TransportError { .. } => ErrorCategory::Network,
            NotifyError::ConfigError { .. }
            | NotifyError::ConfigParseError(_)
            | NotifyError::InvalidConfigValueError { .. }
            | NotifyError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::File | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NotifyError::FileError { path, source } => {
                format!("Could not read '{}': {}", path.display(), source)
            }
            NotifyError::TransportError { endpoint, source } if source.is_connect() => {
                format!("Could not connect to the Telegram Bot API at {}", endpoint)
            }
            NotifyError::TransportError { endpoint, source } if source.is_timeout() => {
                format!("The Telegram Bot API at {} did not respond in time", endpoint)
            }
            NotifyError::TransportError { endpoint, source } => {
                format!("Request to the Telegram Bot API at {} failed: {}", endpoint, source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::File => "Check that the file exists, is readable and is valid UTF-8",
            ErrorCategory::Network => "Check network connectivity and the api_base setting",
            ErrorCategory::Configuration => "Fix the settings file passed with --config",
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
