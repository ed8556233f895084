//! Schema assembly pipeline.
//!
//! ## Components
//!
//! - [`SchemaAssembler`] - Validates the config, appends the root-operation
//!   declaration, parses the document, and finishes the dynamic schema
//! - `type_builder` - Turns parsed type definitions into dynamic types with
//!   default resolvers
//!
//! ## Pipeline
//!
//! 1. Config invariants are checked before anything is parsed
//! 2. `schema { ... }` is appended based on which resolver maps are present
//! 3. The combined document is parsed; parse errors propagate unmodified
//! 4. Every type definition is registered; caller resolvers are spliced
//!    into the root types by field name
//! 5. Engine limits are applied and the schema is finished

mod assembler;
mod type_builder;

pub use assembler::{SchemaAssembler, assemble_schema};
