//! OpenAPI document for the entity routes, built from the schema derives.

use crate::model::Entity;
use crate::schemas::{Order, OrderDetail, Recipe, Resource, Sandwich};
use axum::{routing::get, Json, Router};
use utoipa::openapi::path::{
    HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    Array, ComponentsBuilder, ContentBuilder, InfoBuilder, ObjectBuilder, OpenApi, OpenApiBuilder,
    Ref, RefOr, Required, ResponseBuilder, Schema, Type,
};
use utoipa::ToSchema;

const JSON: &str = "application/json";

fn schema_ref(name: impl Into<String>) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_response(description: &str, schema: Option<RefOr<Schema>>) -> utoipa::openapi::Response {
    let builder = ResponseBuilder::new().description(description);
    match schema {
        Some(s) => builder
            .content(JSON, ContentBuilder::new().schema(Some(s)).build())
            .build(),
        None => builder.build(),
    }
}

fn json_body(schema: RefOr<Schema>) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .required(Some(Required::True))
        .build()
}

fn id_parameter() -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new().schema_type(Type::Integer).build(),
        ))))
        .build()
}

/// Collection and item paths of one entity.
fn entity_paths<E: Entity>(paths: PathsBuilder) -> PathsBuilder {
    let table = E::TABLE;
    let read = || schema_ref(<E as ToSchema>::name());
    let not_found = || json_response("Not found", None);
    let invalid = || json_response("Validation error", None);

    let collection = PathItemBuilder::new()
        .operation(
            HttpMethod::Post,
            OperationBuilder::new()
                .tag(table.tag)
                .operation_id(Some(format!("create_{}", table.name)))
                .request_body(Some(json_body(schema_ref(<E::Create as ToSchema>::name()))))
                .response("201", json_response("Created", Some(read())))
                .response("422", invalid())
                .build(),
        )
        .operation(
            HttpMethod::Get,
            OperationBuilder::new()
                .tag(table.tag)
                .operation_id(Some(format!("read_all_{}", table.name)))
                .response(
                    "200",
                    json_response(
                        "All rows, id ascending",
                        Some(RefOr::T(Schema::Array(Array::new(read())))),
                    ),
                )
                .build(),
        )
        .build();

    let item = PathItemBuilder::new()
        .operation(
            HttpMethod::Get,
            OperationBuilder::new()
                .tag(table.tag)
                .operation_id(Some(format!("read_one_{}", table.name)))
                .parameter(id_parameter())
                .response("200", json_response("Found", Some(read())))
                .response("404", not_found())
                .build(),
        )
        .operation(
            HttpMethod::Put,
            OperationBuilder::new()
                .tag(table.tag)
                .operation_id(Some(format!("update_{}", table.name)))
                .parameter(id_parameter())
                .request_body(Some(json_body(schema_ref(<E::Update as ToSchema>::name()))))
                .response("200", json_response("Updated", Some(read())))
                .response("404", not_found())
                .response("422", invalid())
                .build(),
        )
        .operation(
            HttpMethod::Delete,
            OperationBuilder::new()
                .tag(table.tag)
                .operation_id(Some(format!("delete_{}", table.name)))
                .parameter(id_parameter())
                .response("204", json_response("Deleted", None))
                .response("404", not_found())
                .build(),
        )
        .build();

    paths
        .path(format!("/{}/", table.name), collection)
        .path(format!("/{}/{{id}}", table.name), item)
}

fn entity_components<E: Entity>(components: ComponentsBuilder) -> ComponentsBuilder {
    components
        .schema_from::<E>()
        .schema_from::<E::Create>()
        .schema_from::<E::Update>()
}

pub fn api_doc() -> OpenApi {
    let paths = PathsBuilder::new();
    let paths = entity_paths::<Order>(paths);
    let paths = entity_paths::<OrderDetail>(paths);
    let paths = entity_paths::<Sandwich>(paths);
    let paths = entity_paths::<Resource>(paths);
    let paths = entity_paths::<Recipe>(paths);

    let components = ComponentsBuilder::new();
    let components = entity_components::<Order>(components);
    let components = entity_components::<OrderDetail>(components);
    let components = entity_components::<Sandwich>(components);
    let components = entity_components::<Resource>(components);
    let components = entity_components::<Recipe>(components);

    let tags = [Order::TABLE, OrderDetail::TABLE, Sandwich::TABLE, Resource::TABLE, Recipe::TABLE]
        .iter()
        .map(|t| TagBuilder::new().name(t.tag).build())
        .collect::<Vec<_>>();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(env!("CARGO_PKG_NAME"))
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .paths(paths.build())
        .components(Some(components.build()))
        .tags(Some(tags))
        .build()
}

/// GET /openapi.json
pub fn docs_routes() -> Router {
    let doc = api_doc();
    Router::new().route(
        "/openapi.json",
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}
