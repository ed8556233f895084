//! Executable schema assembly.

use async_graphql::Value;
use async_graphql::dynamic::{Field, FieldFuture, Object, Schema, TypeRef};
use async_graphql_parser::parse_schema;
use async_graphql_parser::types::{ServiceDocument, TypeKind, TypeSystemDefinition};
use tracing::debug;

use crate::config::{AssemblerOptions, SchemaConfig};
use crate::error::SchemaError;
use crate::schema::type_builder;

/// Assembles an executable schema from the config with default options.
///
/// This is the convenience surface; [`SchemaAssembler`] allows overriding
/// the engine limits.
///
/// # Errors
///
/// Returns `InvalidConfig` for config invariant violations, `Parse` for SDL
/// syntax errors, and `SchemaBuild` for semantic schema errors.
pub fn assemble_schema(config: SchemaConfig) -> Result<Schema, SchemaError> {
    SchemaAssembler::new(config).assemble()
}

/// Assembles executable schemas from SDL text plus root resolver maps.
///
/// The assembler appends a `schema { ... }` root-operation declaration
/// chosen solely by which resolver maps are present, parses the combined
/// document, registers every type definition as a dynamic type, and splices
/// the caller's resolvers into the root types by field name. Fields without
/// a resolver entry fall back to parent-value lookup.
pub struct SchemaAssembler {
    config: SchemaConfig,
    options: AssemblerOptions,
}

impl SchemaAssembler {
    /// Creates an assembler with default options.
    #[must_use]
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            options: AssemblerOptions::default(),
        }
    }

    /// Overrides the engine limits applied to the finished schema.
    #[must_use]
    pub fn with_options(mut self, options: AssemblerOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the assembly pipeline.
    ///
    /// The pipeline is a single synchronous pass: there is no partial
    /// success, and no collaborator error is caught or translated beyond
    /// wrapping the engine's build failure message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` before any parsing if the config invariants
    /// fail; `Parse` if the assembled document is syntactically invalid;
    /// `SchemaBuild` for duplicate root declarations, unsupported SDL
    /// constructs, or semantic errors from the schema engine.
    pub fn assemble(&self) -> Result<Schema, SchemaError> {
        self.config.validate()?;
        self.options.validate()?;

        let declaration = self.root_declaration();
        let document = format!("{}\n{declaration}\n", self.config.types);
        debug!(bytes = document.len(), "parsing assembled schema document");

        let ast = parse_schema(&document).map_err(SchemaError::Parse)?;
        let roots = RootOperations::from_document(&ast)?;

        let query_name = roots.query.clone().unwrap_or_else(|| "Query".to_string());
        let mut builder =
            Schema::build(query_name.as_str(), roots.mutation.as_deref(), None::<&str>);

        let mut query_root_defined = false;
        for def in &ast.definitions {
            match def {
                TypeSystemDefinition::Schema(_) => {}
                TypeSystemDefinition::Type(ty) => {
                    let type_name = ty.node.name.node.as_str();
                    if type_name == query_name && matches!(ty.node.kind, TypeKind::Object(_)) {
                        query_root_defined = true;
                    }

                    let resolvers = if roots.query.as_deref() == Some(type_name) {
                        self.config.query.as_ref()
                    } else if roots.mutation.as_deref() == Some(type_name) {
                        self.config.mutation.as_ref()
                    } else {
                        None
                    };

                    builder = builder.register(type_builder::build_type(&ty.node, resolvers)?);
                }
                TypeSystemDefinition::Directive(directive) => {
                    return Err(SchemaError::build(format!(
                        "directive definitions are not supported: @{}",
                        directive.node.name.node
                    )));
                }
            }
        }

        // The engine requires a query root even for mutation-only schemas.
        if roots.query.is_none() && !query_root_defined {
            builder = builder.register(placeholder_query_root(&query_name));
            debug!(name = %query_name, "registered placeholder query root");
        }

        let mut builder = builder
            .limit_depth(self.options.max_depth)
            .limit_complexity(self.options.max_complexity);
        if !self.options.introspection_enabled {
            builder = builder.disable_introspection();
        }

        let schema = builder
            .finish()
            .map_err(|e| SchemaError::SchemaBuild(e.to_string()))?;

        debug!("schema assembly complete");
        Ok(schema)
    }

    /// Returns the root-operation declaration to append. Exactly one of the
    /// three forms is chosen, by presence (not content) of the resolver maps.
    fn root_declaration(&self) -> &'static str {
        match (self.config.query.is_some(), self.config.mutation.is_some()) {
            (true, true) => "schema { query: Query, mutation: Mutation }",
            (true, false) => "schema { query: Query }",
            _ => "schema { mutation: Mutation }",
        }
    }
}

/// Root operation type names read back from the parsed declaration.
struct RootOperations {
    query: Option<String>,
    mutation: Option<String>,
}

impl RootOperations {
    fn from_document(document: &ServiceDocument) -> Result<Self, SchemaError> {
        let mut found = None;
        for def in &document.definitions {
            let TypeSystemDefinition::Schema(schema_def) = def else {
                continue;
            };
            if schema_def.node.extend {
                return Err(SchemaError::build("schema extensions are not supported"));
            }
            if found.is_some() {
                return Err(SchemaError::build(
                    "duplicate schema definition in type definitions",
                ));
            }
            found = Some(&schema_def.node);
        }

        // The appended declaration guarantees at least one schema definition.
        let node =
            found.ok_or_else(|| SchemaError::build("missing root operation declaration"))?;

        Ok(Self {
            query: node.query.as_ref().map(|name| name.node.to_string()),
            mutation: node.mutation.as_ref().map(|name| name.node.to_string()),
        })
    }
}

/// Builds a stub query root with a single nullable field.
fn placeholder_query_root(name: &str) -> Object {
    Object::new(name).field(Field::new(
        "_placeholder",
        TypeRef::named(TypeRef::STRING),
        |_| FieldFuture::new(async { Ok(None::<Value>) }),
    ))
}
