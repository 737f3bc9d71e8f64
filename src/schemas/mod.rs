//! Create / update / read shapes per entity, with the table each one maps to.

mod order;
mod order_detail;
mod recipe;
mod resource;
mod sandwich;

pub use order::{Order, OrderCreate, OrderUpdate, ORDERS};
pub use order_detail::{OrderDetail, OrderDetailCreate, OrderDetailUpdate, ORDER_DETAILS};
pub use recipe::{Recipe, RecipeCreate, RecipeUpdate, RECIPES};
pub use resource::{Resource, ResourceCreate, ResourceUpdate, RESOURCES};
pub use sandwich::{Sandwich, SandwichCreate, SandwichUpdate, SANDWICHES};

use crate::model::TableDef;
use serde::{Deserialize, Deserializer};

/// Every table, parents before the tables that reference them.
pub const ALL_TABLES: &[&TableDef] = &[&SANDWICHES, &RESOURCES, &RECIPES, &ORDERS, &ORDER_DETAILS];

/// Update field of a nullable column: absent is `None`, explicit `null` is `Some(None)`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
