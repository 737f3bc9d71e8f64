//! Entity CRUD routes: `/{table}` and `/{table}/` for the collection, `/{table}/:id` for one row.

use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::model::Entity;
use crate::schemas::{Order, OrderDetail, Recipe, Resource, Sandwich};
use crate::state::AppState;
use axum::{routing::get, Router};

/// The five CRUD routes of one entity, mounted at its table name.
pub fn resource_routes<E: Entity>() -> Router<AppState> {
    let collection = format!("/{}", E::TABLE.name);
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&format!("{}/", collection), get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/:id", collection),
            get(read::<E>).put(update::<E>).delete(delete_handler::<E>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Order>())
        .merge(resource_routes::<OrderDetail>())
        .merge(resource_routes::<Sandwich>())
        .merge(resource_routes::<Resource>())
        .merge(resource_routes::<Recipe>())
        .with_state(state)
}
