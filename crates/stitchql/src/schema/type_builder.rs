//! Turns parsed SDL type definitions into dynamic schema types.
//!
//! Object types, enums, and input objects are supported. Each object field
//! gets either the caller's resolver (for root types) or the default lookup
//! resolver. Custom scalars, interfaces, unions, directive definitions, and
//! type extensions are not supported and fail schema assembly.

use async_graphql::dynamic::{
    Enum, EnumItem, Field, InputObject, InputValue, Object, Type as DynamicType, TypeRef,
};
use async_graphql_parser::types::{
    BaseType, EnumType, InputObjectType, InputValueDefinition, ObjectType, Type as AstType,
    TypeDefinition, TypeKind,
};
use tracing::{debug, trace};

use crate::error::SchemaError;
use crate::resolver::{ResolverMap, lookup_resolver};

/// Builds a dynamic type from a parsed type definition.
///
/// `resolvers` is `Some` only when the definition is a root operation type;
/// its entries are spliced into the object's fields by name.
pub(crate) fn build_type(
    def: &TypeDefinition,
    resolvers: Option<&ResolverMap>,
) -> Result<DynamicType, SchemaError> {
    let name = def.name.node.as_str();

    if def.extend {
        return Err(SchemaError::build(format!(
            "type extensions are not supported: {name}"
        )));
    }

    match &def.kind {
        TypeKind::Object(object) => Ok(build_object(name, def, object, resolvers).into()),
        TypeKind::Enum(enum_type) => Ok(build_enum(name, def, enum_type).into()),
        TypeKind::InputObject(input) => Ok(build_input_object(name, def, input).into()),
        TypeKind::Scalar => Err(SchemaError::build(format!(
            "custom scalar definitions are not supported: {name}"
        ))),
        TypeKind::Interface(_) => Err(SchemaError::build(format!(
            "interface definitions are not supported: {name}"
        ))),
        TypeKind::Union(_) => Err(SchemaError::build(format!(
            "union definitions are not supported: {name}"
        ))),
    }
}

/// Builds an object type, splicing in resolvers by field name.
fn build_object(
    name: &str,
    def: &TypeDefinition,
    object: &ObjectType,
    resolvers: Option<&ResolverMap>,
) -> Object {
    let mut obj = Object::new(name);
    if let Some(description) = &def.description {
        obj = obj.description(description.node.clone());
    }

    for field_def in &object.fields {
        let field_name = field_def.node.name.node.to_string();
        let ty = type_ref(&field_def.node.ty.node);

        let mut field = match resolvers.and_then(|map| map.get(&field_name)) {
            Some(resolver) => {
                trace!(object = %name, field = %field_name, "spliced caller resolver");
                Field::new(&field_name, ty, move |ctx| resolver(ctx))
            }
            None => Field::new(&field_name, ty, lookup_resolver(field_name.clone())),
        };

        if let Some(description) = &field_def.node.description {
            field = field.description(description.node.clone());
        }
        for argument in &field_def.node.arguments {
            field = field.argument(input_value(&argument.node));
        }

        obj = obj.field(field);
    }

    // Resolver entries that match no declared field are ignored, like the
    // field walk over the built schema they replace.
    if let Some(map) = resolvers {
        for resolver_name in map.names() {
            let declared = object
                .fields
                .iter()
                .any(|f| f.node.name.node.as_str() == resolver_name);
            if !declared {
                debug!(
                    object = %name,
                    field = %resolver_name,
                    "resolver has no matching field; ignored"
                );
            }
        }
    }

    obj
}

/// Builds an enum type.
fn build_enum(name: &str, def: &TypeDefinition, enum_type: &EnumType) -> Enum {
    let mut en = Enum::new(name);
    if let Some(description) = &def.description {
        en = en.description(description.node.clone());
    }

    for value in &enum_type.values {
        let mut item = EnumItem::new(value.node.value.node.as_str());
        if let Some(description) = &value.node.description {
            item = item.description(description.node.clone());
        }
        en = en.item(item);
    }

    en
}

/// Builds an input object type.
fn build_input_object(name: &str, def: &TypeDefinition, input: &InputObjectType) -> InputObject {
    let mut obj = InputObject::new(name);
    if let Some(description) = &def.description {
        obj = obj.description(description.node.clone());
    }

    for field_def in &input.fields {
        obj = obj.field(input_value(&field_def.node));
    }

    obj
}

/// Converts an input value definition (field argument or input field).
fn input_value(def: &InputValueDefinition) -> InputValue {
    let mut input = InputValue::new(def.name.node.as_str(), type_ref(&def.ty.node));
    if let Some(description) = &def.description {
        input = input.description(description.node.clone());
    }
    if let Some(default) = &def.default_value {
        input = input.default_value(default.node.clone());
    }
    input
}

/// Converts a parsed SDL type reference, preserving list and non-null
/// wrappers at any nesting depth.
fn type_ref(ty: &AstType) -> TypeRef {
    let base = match &ty.base {
        BaseType::Named(name) => TypeRef::Named(name.to_string().into()),
        BaseType::List(inner) => TypeRef::List(Box::new(type_ref(inner))),
    };
    if ty.nullable {
        base
    } else {
        TypeRef::NonNull(Box::new(base))
    }
}
