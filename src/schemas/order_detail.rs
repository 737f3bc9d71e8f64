//! Order details: the sandwich lines of an order.

use crate::model::{ColumnDef, ColumnKind, TableDef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ORDER_DETAILS: TableDef = TableDef {
    name: "order_details",
    label: "Order Detail",
    tag: "Order Details",
    columns: &[
        ColumnDef::new("order_id", ColumnKind::Int, "INTEGER")
            .nullable()
            .references("orders"),
        ColumnDef::new("sandwich_id", ColumnKind::Int, "INTEGER")
            .nullable()
            .references("sandwiches"),
        ColumnDef::new("amount", ColumnKind::Int, "INTEGER"),
    ],
};

/// One line of an order: a sandwich and how many of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: Option<i32>,
    pub sandwich_id: Option<i32>,
    pub amount: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailCreate {
    #[serde(default)]
    pub order_id: Option<i32>,
    #[serde(default)]
    pub sandwich_id: Option<i32>,
    pub amount: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailUpdate {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub order_id: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub sandwich_id: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

impl crate::model::Entity for OrderDetail {
    type Create = OrderDetailCreate;
    type Update = OrderDetailUpdate;

    const TABLE: &'static TableDef = &ORDER_DETAILS;
}
