use common::error::DiagnosticMessage;
use common::types::CatalogError;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("template error: {context}")]
    Template {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("write error: {context}")]
    Io {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl From<minijinja::Error> for GenerateError {
    #[track_caller]
    fn from(err: minijinja::Error) -> Self {
        GenerateError::Template {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for GenerateError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        GenerateError::Io {
            context: DiagnosticMessage::new(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
