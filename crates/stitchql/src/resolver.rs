//! Resolver maps and the default lookup resolver.
//!
//! A [`ResolverMap`] associates root field names with resolver functions in
//! the shape the dynamic schema engine expects: a function from resolver
//! context to [`FieldFuture`]. Fields without an entry are resolved by
//! [`lookup_resolver`], which reads the field name out of the parent value.

use std::fmt;
use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::{FieldFuture, ResolverContext};
use indexmap::IndexMap;

/// A shared resolver function for a single field.
pub type ResolverFn =
    Arc<dyn for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync>;

/// Mapping from field name to resolver function.
///
/// Insertion order is preserved. The map need not mention every field of the
/// root type, and entries that match no declared field are ignored during
/// assembly.
#[derive(Default, Clone)]
pub struct ResolverMap {
    fields: IndexMap<String, ResolverFn>,
}

impl ResolverMap {
    /// Creates an empty resolver map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolver for a field name, replacing any previous entry.
    pub fn insert<F>(&mut self, name: impl Into<String>, resolver: F)
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.fields.insert(name.into(), Arc::new(resolver));
    }

    /// Registers a resolver and returns the map, for chained construction.
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.insert(name, resolver);
        self
    }

    /// Returns whether a resolver is registered for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of registered resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the resolver registered for `name`, if any.
    pub(crate) fn get(&self, name: &str) -> Option<ResolverFn> {
        self.fields.get(name).cloned()
    }

    /// Iterates over the registered field names in insertion order.
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for ResolverMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields.keys()).finish()
    }
}

/// Creates the default resolver for a field: property lookup of the field
/// name on the parent value.
///
/// This is the engine-default resolution strategy; it makes fields without a
/// caller-supplied resolver work against plain object values returned by
/// parent resolvers.
pub(crate) fn lookup_resolver(
    field_name: String,
) -> impl for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + Clone + 'static {
    move |ctx| {
        let field_name = field_name.clone();
        FieldFuture::new(async move {
            if let Some(Value::Object(parent)) = ctx.parent_value.as_value() {
                match parent.get(field_name.as_str()) {
                    Some(Value::Null) | None => Ok(None),
                    Some(value) => Ok(Some(value.clone())),
                }
            } else {
                Ok(None)
            }
        })
    }
}
