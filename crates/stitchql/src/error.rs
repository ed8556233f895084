//! Error types for schema assembly.
//!
//! Assembly either returns a complete schema or fails synchronously; nothing
//! is retried or partially applied. Parser errors are carried verbatim so the
//! caller sees the originating diagnostic.

use thiserror::Error;

/// Errors that can occur while assembling a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema config violates an input invariant.
    #[error("invalid schema config: {0}")]
    InvalidConfig(String),

    /// The assembled SDL document failed to parse.
    #[error("failed to parse type definitions: {0}")]
    Parse(async_graphql_parser::Error),

    /// The parsed document could not be turned into a valid schema.
    #[error("failed to build schema: {0}")]
    SchemaBuild(String),
}

impl SchemaError {
    /// Creates a new InvalidConfig error.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Creates a new SchemaBuild error.
    pub(crate) fn build(message: impl Into<String>) -> Self {
        Self::SchemaBuild(message.into())
    }
}
