use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an extraction pass.
///
/// Malformed resources are not represented here; they are logged and
/// skipped where they are found.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read route definition {path:?} referenced by {resource}: {source}")]
    DefinitionRead {
        resource: String,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to parse route definition {path:?} referenced by {resource}: {source}")]
    DefinitionParse {
        resource: String,
        path: PathBuf,
        #[source]
        source: TemplateError,
    },
}

impl ExtractError {
    /// Logical name of the resource whose definition failed
    pub fn resource(&self) -> &str {
        match self {
            ExtractError::DefinitionRead { resource, .. }
            | ExtractError::DefinitionParse { resource, .. } => resource,
        }
    }
}
