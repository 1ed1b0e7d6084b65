use crate::error::diagnostics::DiagnosticMessage;
use std::{error::Error as StdError, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("incorrect path: {context}")]
    IncorrectPath { context: DiagnosticMessage },
    #[error("parse error: {context}")]
    ParseError {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("filesystem error: {context}")]
    PathError {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn incorrect_path(path: impl AsRef<Path>) -> Self {
        let message = format!("Expected path '{}' to exist", path.as_ref().display());
        Self::IncorrectPath {
            context: DiagnosticMessage::new(message),
        }
    }

    #[track_caller]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    /// Attaches the offending file to an I/O or YAML failure.
    #[track_caller]
    pub fn in_file<E>(path: impl AsRef<Path>, err: E) -> Self
    where
        E: Into<ConfigError>,
    {
        let display = path.as_ref().display().to_string();
        match err.into() {
            ConfigError::ParseError { context, source } => ConfigError::ParseError {
                context: DiagnosticMessage::new(format!("{display}: {}", context.message())),
                source,
            },
            ConfigError::PathError { context, source } => ConfigError::PathError {
                context: DiagnosticMessage::new(format!("{display}: {}", context.message())),
                source,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        ConfigError::PathError {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    #[track_caller]
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
