//! Resources: ingredient stock levels.

use crate::model::{ColumnDef, ColumnKind, TableDef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const RESOURCES: TableDef = TableDef {
    name: "resources",
    label: "Resource",
    tag: "Resources",
    columns: &[
        ColumnDef::new("item", ColumnKind::Text, "VARCHAR(100)").unique(),
        ColumnDef::new("amount", ColumnKind::Int, "INTEGER").default("0"),
    ],
};

/// An ingredient in stock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    pub id: i32,
    pub item: String,
    pub amount: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourceCreate {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ResourceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

impl crate::model::Entity for Resource {
    type Create = ResourceCreate;
    type Update = ResourceUpdate;

    const TABLE: &'static TableDef = &RESOURCES;
}
