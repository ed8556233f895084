//! # stitchql
//!
//! Builds executable GraphQL schemas from schema-definition-language (SDL)
//! text plus plain resolver maps for the root query and mutation operations.
//!
//! This crate is a thin assembly layer: it does not parse or execute GraphQL
//! itself. Parsing is delegated to `async-graphql-parser` and execution to
//! `async-graphql`'s dynamic schema engine. What the crate does is:
//!
//! 1. Validate the [`SchemaConfig`] invariants
//! 2. Append a synthetic `schema { ... }` root-operation declaration based
//!    on which resolver maps were supplied
//! 3. Parse the combined document into an AST
//! 4. Register every type definition as a dynamic type, splicing the
//!    caller's resolvers into the root field definitions by name
//! 5. Finish and return the schema
//!
//! Fields without a caller-supplied resolver fall back to property lookup of
//! the field name on the parent value, matching the engine's default
//! resolution strategy.
//!
//! ## Example
//!
//! ```ignore
//! let mut query = ResolverMap::new();
//! query.insert("get", |_ctx| {
//!     FieldFuture::new(async {
//!         Ok(Some(Value::from_json(json!({ "name": "bob" }))?))
//!     })
//! });
//!
//! let schema = assemble_schema(
//!     SchemaConfig::new("type Person { name: String } type Query { get: Person }")
//!         .query(query),
//! )?;
//!
//! let response = schema.execute("{ get { name } }").await;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Schema configuration and assembler options
//! - [`resolver`] - Resolver maps and the default lookup resolver
//! - [`schema`] - Schema assembly pipeline
//! - [`error`] - Error types for schema assembly

pub mod config;
pub mod error;
pub mod resolver;
pub mod schema;

// Re-export main types
pub use config::{AssemblerOptions, SchemaConfig};
pub use error::SchemaError;
pub use resolver::{ResolverFn, ResolverMap};
pub use schema::{SchemaAssembler, assemble_schema};

/// Result type for schema assembly operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
