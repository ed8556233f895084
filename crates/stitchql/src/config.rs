//! Schema configuration.
//!
//! [`SchemaConfig`] carries the inputs to assembly: the SDL text and the
//! optional resolver maps for the root query and mutation operations. The
//! shape checks the original contract performed at runtime ("must be an
//! object", "must be text") are enforced here by the field types; the two
//! invariants the type system cannot express are validated when assembly
//! starts.
//!
//! [`AssemblerOptions`] carries the execution-engine limits applied to the
//! finished schema.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::resolver::ResolverMap;

/// Inputs for schema assembly.
///
/// At least one of the query/mutation resolver maps must be supplied. The
/// maps need not cover every field declared in `types`; uncovered fields
/// fall back to the default lookup resolver.
#[derive(Debug, Default, Clone)]
pub struct SchemaConfig {
    /// SDL text with the type definitions.
    pub(crate) types: String,

    /// Resolvers for the root query type, keyed by field name.
    pub(crate) query: Option<ResolverMap>,

    /// Resolvers for the root mutation type, keyed by field name.
    pub(crate) mutation: Option<ResolverMap>,
}

impl SchemaConfig {
    /// Creates a config from SDL type definitions.
    #[must_use]
    pub fn new(types: impl Into<String>) -> Self {
        Self {
            types: types.into(),
            query: None,
            mutation: None,
        }
    }

    /// Supplies resolvers for the root query type.
    #[must_use]
    pub fn query(mut self, resolvers: ResolverMap) -> Self {
        self.query = Some(resolvers);
        self
    }

    /// Supplies resolvers for the root mutation type.
    #[must_use]
    pub fn mutation(mut self, resolvers: ResolverMap) -> Self {
        self.mutation = Some(resolvers);
        self
    }

    /// Validates the config invariants that survive static typing.
    ///
    /// The non-empty check on `types` stands in for the original contract's
    /// "types must be present and be text" shape check; syntactic problems
    /// beyond emptiness still surface from the parser.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `types` is empty or neither resolver map
    /// was supplied.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.types.trim().is_empty() {
            return Err(SchemaError::invalid_config(
                "types must be non-empty SDL text",
            ));
        }
        if self.query.is_none() && self.mutation.is_none() {
            return Err(SchemaError::invalid_config(
                "at least one of query or mutation resolvers is required",
            ));
        }
        Ok(())
    }
}

/// Engine limits applied to the assembled schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerOptions {
    /// Maximum query depth allowed.
    /// Default: 15
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    /// Default: 500
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,

    /// Whether to enable introspection queries.
    /// Default: true
    #[serde(default = "default_introspection")]
    pub introspection_enabled: bool,
}

fn default_max_depth() -> usize {
    15
}

fn default_max_complexity() -> usize {
    500
}

fn default_introspection() -> bool {
    true
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
            introspection_enabled: default_introspection(),
        }
    }
}

impl AssemblerOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a limit is zero.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.max_depth == 0 {
            return Err(SchemaError::invalid_config("max_depth must be > 0"));
        }
        if self.max_complexity == 0 {
            return Err(SchemaError::invalid_config("max_complexity must be > 0"));
        }
        Ok(())
    }
}
