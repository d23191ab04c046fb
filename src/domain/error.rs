use std::io;

use thiserror::Error;

/// Library-wide error type for cfobs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigFileNotFound(String),

    /// Document is not well-formed YAML.
    #[error("Failed to parse {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Document parses but does not have the required shape.
    #[error("Invalid configuration: {0}")]
    ConfigSchema(String),

    /// A query named a group or variable that the document does not define.
    #[error("{kind} '{key}' not found. Available: {available}")]
    KeyNotFound { kind: KeyKind, key: String, available: String },

    /// Template contains a date directive that cannot be rendered.
    #[error("Invalid date directive in template '{template}': {details}")]
    TemplateFormat { template: String, details: String },

    /// JSON rendering of command output failed.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Group,
    Variable,
    MappingEntry,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            KeyKind::Group => "Group",
            KeyKind::Variable => "Variable",
            KeyKind::MappingEntry => "Mapping entry",
        };
        f.write_str(label)
    }
}

impl AppError {
    pub fn schema<S: Into<String>>(message: S) -> Self {
        AppError::ConfigSchema(message.into())
    }

    pub(crate) fn key_not_found<'a, I>(kind: KeyKind, key: &str, available: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let available = available.into_iter().map(String::as_str).collect::<Vec<_>>();
        let available = if available.is_empty() { "(none)".to_string() } else { available.join(", ") };
        AppError::KeyNotFound { kind, key: key.to_string(), available }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigParse { .. }
            | AppError::ConfigSchema(_)
            | AppError::TemplateFormat { .. } => io::ErrorKind::InvalidData,
            AppError::ConfigFileNotFound(_) | AppError::KeyNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Json(_) => io::ErrorKind::Other,
        }
    }
}
