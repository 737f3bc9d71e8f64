//! Orders: who ordered and when.

use crate::model::{ColumnDef, ColumnKind, TableDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ORDERS: TableDef = TableDef {
    name: "orders",
    label: "Order",
    tag: "Orders",
    columns: &[
        ColumnDef::new("customer_name", ColumnKind::Text, "VARCHAR(100)").nullable(),
        ColumnDef::new("order_date", ColumnKind::Timestamp, "TIMESTAMPTZ").default("NOW()"),
        ColumnDef::new("description", ColumnKind::Text, "VARCHAR(300)").nullable(),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub customer_name: Option<String>,
    /// Set by the database when the order is placed.
    pub order_date: DateTime<Utc>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreate {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderUpdate {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub customer_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl crate::model::Entity for Order {
    type Create = OrderCreate;
    type Update = OrderUpdate;

    const TABLE: &'static TableDef = &ORDERS;
}
