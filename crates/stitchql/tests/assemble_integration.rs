//! Integration tests for schema assembly.
//!
//! These tests verify the complete flow: SDL text plus resolver maps in,
//! executable schema out, queries executed against it.

use async_graphql::Value;
use async_graphql::dynamic::FieldFuture;
use serde_json::json;
use stitchql::{ResolverMap, SchemaConfig, assemble_schema};

#[tokio::test]
async fn query_resolver_is_wired_by_field_name() {
    let query = ResolverMap::new().with("get", |_ctx| {
        FieldFuture::new(async { Ok(Some(Value::from_json(json!({ "name": "bob" })).unwrap())) })
    });

    let schema = assemble_schema(
        SchemaConfig::new("type Person { name: String } type Query { get: Person }").query(query),
    )
    .unwrap();

    let response = schema.execute("{ get { name } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({ "get": { "name": "bob" } })).unwrap()
    );
}

#[tokio::test]
async fn fields_without_resolvers_use_parent_value_lookup() {
    let query = ResolverMap::new().with("person", |_ctx| {
        FieldFuture::new(async {
            Ok(Some(
                Value::from_json(json!({
                    "name": "ada",
                    "address": { "city": "london" }
                }))
                .unwrap(),
            ))
        })
    });

    let schema = assemble_schema(
        SchemaConfig::new(
            "type Address { city: String } \
             type Person { name: String, address: Address } \
             type Query { person: Person, version: String }",
        )
        .query(query),
    )
    .unwrap();

    // Nested fields resolve by lookup on the parent object value.
    let response = schema
        .execute("{ person { name address { city } } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({
            "person": { "name": "ada", "address": { "city": "london" } }
        }))
        .unwrap()
    );

    // A root field with no resolver entry resolves to null, not an error.
    let response = schema.execute("{ version }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({ "version": null })).unwrap()
    );
}

#[tokio::test]
async fn mutation_resolver_receives_arguments() {
    let query = ResolverMap::new().with("current", |_ctx| {
        FieldFuture::new(async { Ok(Some(Value::from("initial"))) })
    });
    let mutation = ResolverMap::new().with("set", |ctx| {
        FieldFuture::new(async move {
            let value = ctx
                .args
                .get("value")
                .and_then(|v| v.string().ok().map(str::to_string))
                .ok_or_else(|| async_graphql::Error::new("Missing required argument 'value'"))?;
            Ok(Some(Value::String(value)))
        })
    });

    let schema = assemble_schema(
        SchemaConfig::new(
            "type Query { current: String } \
             type Mutation { set(value: String!): String }",
        )
        .query(query)
        .mutation(mutation),
    )
    .unwrap();

    let response = schema.execute(r#"mutation { set(value: "hello") }"#).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({ "set": "hello" })).unwrap()
    );
}

#[tokio::test]
async fn default_argument_values_are_honored() {
    let query = ResolverMap::new().with("count", |ctx| {
        FieldFuture::new(async move {
            let n = ctx.args.get("n").and_then(|v| v.i64().ok()).unwrap_or(0);
            Ok(Some(Value::from(n)))
        })
    });

    let schema =
        assemble_schema(SchemaConfig::new("type Query { count(n: Int = 3): Int }").query(query))
            .unwrap();

    let response = schema.execute("{ count }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({ "count": 3 })).unwrap()
    );

    let response = schema.execute("{ count(n: 7) }").await;
    assert_eq!(
        response.data,
        Value::from_json(json!({ "count": 7 })).unwrap()
    );
}

#[tokio::test]
async fn query_only_schema_rejects_mutation_operations() {
    let query = ResolverMap::new().with("ok", |_ctx| {
        FieldFuture::new(async { Ok(Some(Value::from(true))) })
    });

    let schema =
        assemble_schema(SchemaConfig::new("type Query { ok: Boolean }").query(query)).unwrap();

    let response = schema.execute("{ ok }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = schema.execute("mutation { anything }").await;
    assert!(
        !response.errors.is_empty(),
        "mutation against a query-only schema must fail"
    );
}

#[tokio::test]
async fn mutation_only_schema_executes_mutations() {
    let mutation = ResolverMap::new().with("bump", |_ctx| {
        FieldFuture::new(async { Ok(Some(Value::from(1))) })
    });

    let schema = assemble_schema(
        SchemaConfig::new("type Mutation { bump: Int }").mutation(mutation),
    )
    .unwrap();

    let response = schema.execute("mutation { bump }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(response.data, Value::from_json(json!({ "bump": 1 })).unwrap());

    // The stub query root answers with null and nothing else.
    let response = schema.execute("{ _placeholder }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        Value::from_json(json!({ "_placeholder": null })).unwrap()
    );
}

#[tokio::test]
async fn repeated_assembly_yields_independent_schemas() {
    let config = SchemaConfig::new("type Query { n: Int }").query(ResolverMap::new().with(
        "n",
        |_ctx| FieldFuture::new(async { Ok(Some(Value::from(42))) }),
    ));

    let first = assemble_schema(config.clone()).unwrap();
    let second = assemble_schema(config).unwrap();

    let expected = Value::from_json(json!({ "n": 42 })).unwrap();
    assert_eq!(first.execute("{ n }").await.data, expected);
    assert_eq!(second.execute("{ n }").await.data, expected);
    assert_eq!(first.sdl(), second.sdl());
}
