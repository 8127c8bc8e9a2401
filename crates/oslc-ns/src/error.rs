//! Error types for registry operations and schema loading.

use thiserror::Error;

/// Errors raised by [`NamespaceRegistry`](crate::registry::NamespaceRegistry) calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("prefix `{prefix}` is already bound to <{existing}>, cannot rebind to <{requested}>")]
    DuplicatePrefix {
        prefix: String,
        existing: String,
        requested: String,
    },

    #[error("unknown prefix: `{0}`")]
    UnknownPrefix(String),

    #[error("invalid prefix: `{0}`")]
    InvalidPrefix(String),

    #[error("namespace URI is not absolute: `{0}`")]
    InvalidNamespaceUri(String),

    #[error("not a prefixed name: `{0}`")]
    InvalidCurie(String),
}

/// Errors that can occur while loading a schema file.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
