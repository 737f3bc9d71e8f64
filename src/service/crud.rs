//! Generic CRUD over any `Entity`, expressed against the row-level `Store`.

use crate::error::AppError;
use crate::model::{Entity, Row, PK_COLUMN};
use crate::store::Store;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub struct CrudService;

impl CrudService {
    /// Insert one row from a create payload. Returns the stored record with its new id.
    pub async fn create<E: Entity>(store: &dyn Store, payload: E::Create) -> Result<E, AppError> {
        let row = store.insert(E::TABLE, to_row(&payload)?).await?;
        tracing::info!(table = E::TABLE.name, id = ?row.get(PK_COLUMN), "created");
        from_row(row)
    }

    /// Every row of the table, id ascending.
    pub async fn read_all<E: Entity>(store: &dyn Store) -> Result<Vec<E>, AppError> {
        store
            .select_all(E::TABLE)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }

    pub async fn read_one<E: Entity>(store: &dyn Store, id: i32) -> Result<E, AppError> {
        let row = store
            .select_by_id(E::TABLE, id)
            .await?
            .ok_or_else(|| AppError::NotFound(E::TABLE.not_found()))?;
        from_row(row)
    }

    /// Apply the fields present in `patch`; everything else keeps its value.
    pub async fn update<E: Entity>(store: &dyn Store, id: i32, patch: E::Update) -> Result<E, AppError> {
        let values = to_row(&patch)?;
        let changed = values.len();
        let row = store
            .update(E::TABLE, id, values)
            .await?
            .ok_or_else(|| AppError::NotFound(E::TABLE.not_found()))?;
        tracing::info!(table = E::TABLE.name, id, fields = changed, "updated");
        from_row(row)
    }

    pub async fn delete<E: Entity>(store: &dyn Store, id: i32) -> Result<(), AppError> {
        if !store.delete(E::TABLE, id).await? {
            return Err(AppError::NotFound(E::TABLE.not_found()));
        }
        tracing::info!(table = E::TABLE.name, id, "deleted");
        Ok(())
    }
}

/// Payload to column map. Update payloads skip unset fields when serialized, so only
/// the columns the client sent end up in the map.
fn to_row<T: Serialize>(payload: &T) -> Result<Row, AppError> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Validation(format!("expected a JSON object, got {}", other))),
    }
}

fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, AppError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{OrderUpdate, RecipeCreate, SandwichUpdate, RECIPES};
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn empty_update_has_no_columns() {
        assert!(to_row(&SandwichUpdate::default()).unwrap().is_empty());
    }

    #[test]
    fn update_keeps_only_sent_fields() {
        let patch = SandwichUpdate {
            price: Some(Decimal::new(649, 2)),
            ..Default::default()
        };
        let row = to_row(&patch).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row["price"], json!(6.49));
    }

    #[test]
    fn explicit_null_on_nullable_column_is_kept() {
        let patch: OrderUpdate = serde_json::from_value(json!({"description": null})).unwrap();
        let row = to_row(&patch).unwrap();
        assert_eq!(row.get("description"), Some(&Value::Null));
        assert!(!row.contains_key("customer_name"));
    }

    #[test]
    fn create_without_defaulted_amount_leaves_it_to_the_database() {
        let payload: RecipeCreate = serde_json::from_value(json!({"sandwich_id": 1})).unwrap();
        let row = to_row(&payload).unwrap();
        assert!(!row.contains_key("amount"));
        assert_eq!(row["resource_id"], Value::Null);

        let q = crate::sql::insert(&RECIPES, &row);
        assert!(q.sql.starts_with(r#"INSERT INTO "recipes" ("sandwich_id", "resource_id") VALUES"#));
    }
}
