//! Sandwich API: CRUD REST backend for orders, order details, sandwiches, resources and recipes.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{ColumnDef, ColumnKind, Entity, Row, TableDef};
pub use routes::{api_doc, app, common_routes, docs_routes, entity_routes, resource_routes};
pub use schemas::ALL_TABLES;
pub use service::CrudService;
pub use state::AppState;
pub use store::{ensure_database_exists, PgStore, Store};
