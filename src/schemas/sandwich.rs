//! Sandwiches on the menu and their prices.

use crate::model::{ColumnDef, ColumnKind, TableDef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SANDWICHES: TableDef = TableDef {
    name: "sandwiches",
    label: "Sandwich",
    tag: "Sandwiches",
    columns: &[
        ColumnDef::new("sandwich_name", ColumnKind::Text, "VARCHAR(100)")
            .nullable()
            .unique(),
        ColumnDef::new("price", ColumnKind::Decimal, "NUMERIC(4, 2)"),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sandwich {
    pub id: i32,
    pub sandwich_name: Option<String>,
    pub price: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SandwichCreate {
    #[serde(default, alias = "name")]
    pub sandwich_name: Option<String>,
    pub price: Decimal,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SandwichUpdate {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub sandwich_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl crate::model::Entity for Sandwich {
    type Create = SandwichCreate;
    type Update = SandwichUpdate;

    const TABLE: &'static TableDef = &SANDWICHES;
}
