pub mod diagnostics;
pub use crate::config::error::ConfigError;
pub use diagnostics::DiagnosticMessage;

use std::error::Error as StdError;
use thiserror::Error;

/// Top-level error surfaced by the `chgen` commands.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("initialisation failed: {context}")]
    Init {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("generation failed: {context}")]
    Generate {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("invalid configuration: {context}")]
    Config {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl GenError {
    #[track_caller]
    pub fn init<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        GenError::Init {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn init_msg(message: impl Into<String>) -> Self {
        GenError::Init {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn generate<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        GenError::Generate {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn generate_msg(message: impl Into<String>) -> Self {
        GenError::Generate {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn config<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        GenError::Config {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ConfigError> for GenError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        GenError::config(err)
    }
}
