//! Recipes: resource quantities per sandwich.

use crate::model::{ColumnDef, ColumnKind, TableDef};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const RECIPES: TableDef = TableDef {
    name: "recipes",
    label: "Recipe",
    tag: "Recipes",
    columns: &[
        ColumnDef::new("sandwich_id", ColumnKind::Int, "INTEGER")
            .nullable()
            .references("sandwiches"),
        ColumnDef::new("resource_id", ColumnKind::Int, "INTEGER")
            .nullable()
            .references("resources"),
        ColumnDef::new("amount", ColumnKind::Int, "INTEGER").default("0"),
    ],
};

/// How much of one resource goes into one sandwich.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: i32,
    pub sandwich_id: Option<i32>,
    pub resource_id: Option<i32>,
    pub amount: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeCreate {
    #[serde(default)]
    pub sandwich_id: Option<i32>,
    #[serde(default)]
    pub resource_id: Option<i32>,
    /// Left out of the INSERT when absent, so the column default (0) applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RecipeUpdate {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub sandwich_id: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub resource_id: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

impl crate::model::Entity for Recipe {
    type Create = RecipeCreate;
    type Update = RecipeUpdate;

    const TABLE: &'static TableDef = &RECIPES;
}
