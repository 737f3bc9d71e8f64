//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table descriptor.

use crate::model::{ColumnDef, Row, TableDef, PK_COLUMN};
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from table descriptors).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }

    /// Push a value and return its placeholder cast to the column's base type.
    fn placeholder(&mut self, column: &ColumnDef, v: Value) -> String {
        let n = self.push_param(v);
        format!("${}::{}", n, column.kind.cast())
    }
}

/// `"id", "col_a", "col_b"`: the column list every statement selects or returns.
fn select_column_list(table: &TableDef) -> String {
    std::iter::once(PK_COLUMN)
        .chain(table.columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, id ascending.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(PK_COLUMN)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}::INTEGER",
        select_column_list(table),
        quoted(table.name),
        quoted(PK_COLUMN),
        n
    );
    q
}

/// INSERT: one placeholder per column, values from `values`.
/// Columns with a DB default are omitted when `values` does not provide them, so the
/// default applies; any other missing column is bound as NULL.
pub fn insert(table: &TableDef, values: &Row) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in table.columns {
        let val = values.get(c.name).cloned();
        if val.is_none() && c.default.is_some() {
            continue;
        }
        placeholders.push(q.placeholder(c, val.unwrap_or(Value::Null)));
        cols.push(quoted(c.name));
    }
    let returning = select_column_list(table);
    q.sql = if cols.is_empty() {
        format!(
            "INSERT INTO {} DEFAULT VALUES RETURNING {}",
            quoted(table.name),
            returning
        )
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE by id: SET only the descriptor's columns that are present in `values`.
/// The primary key is never written. With nothing to set this degrades to a
/// SELECT by id, so the caller still learns whether the row exists.
pub fn update(table: &TableDef, id: i32, values: &Row) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for c in table.columns {
        let Some(v) = values.get(c.name) else { continue };
        let rhs = q.placeholder(c, v.clone());
        sets.push(format!("{} = {}", quoted(c.name), rhs));
    }
    if sets.is_empty() {
        return select_by_id(table, id);
    }
    let id_param = q.push_param(Value::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}::INTEGER RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(PK_COLUMN),
        id_param,
        select_column_list(table)
    );
    q
}

/// DELETE by id, returning the id of the removed row.
pub fn delete(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}::INTEGER RETURNING {}",
        quoted(table.name),
        quoted(PK_COLUMN),
        n,
        quoted(PK_COLUMN)
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ORDERS, SANDWICHES};
    use serde_json::json;

    fn row(v: Value) -> Row {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn select_all_orders_by_id() {
        let q = select_all(&SANDWICHES);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "sandwich_name", "price" FROM "sandwiches" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_casts_each_placeholder() {
        let q = insert(&SANDWICHES, &row(json!({"sandwich_name": "BLT", "price": 5.99})));
        assert_eq!(
            q.sql,
            r#"INSERT INTO "sandwiches" ("sandwich_name", "price") VALUES ($1::VARCHAR, $2::NUMERIC) RETURNING "id", "sandwich_name", "price""#
        );
        assert_eq!(q.params, vec![json!("BLT"), json!(5.99)]);
    }

    #[test]
    fn insert_skips_unset_columns_with_defaults() {
        let q = insert(&ORDERS, &row(json!({"customer_name": "Ann"})));
        assert_eq!(
            q.sql,
            r#"INSERT INTO "orders" ("customer_name", "description") VALUES ($1::VARCHAR, $2::VARCHAR) RETURNING "id", "customer_name", "order_date", "description""#
        );
        assert_eq!(q.params, vec![json!("Ann"), Value::Null]);
    }

    #[test]
    fn update_sets_only_present_columns_and_ignores_id() {
        let q = update(&SANDWICHES, 7, &row(json!({"price": 6.49, "id": 99})));
        assert_eq!(
            q.sql,
            r#"UPDATE "sandwiches" SET "price" = $1::NUMERIC WHERE "id" = $2::INTEGER RETURNING "id", "sandwich_name", "price""#
        );
        assert_eq!(q.params, vec![json!(6.49), json!(7)]);
    }

    #[test]
    fn empty_update_falls_back_to_select() {
        let q = update(&SANDWICHES, 3, &Row::new());
        assert!(q.sql.starts_with("SELECT "));
        assert_eq!(q.params, vec![json!(3)]);
    }

    #[test]
    fn explicit_null_is_written() {
        let q = update(&ORDERS, 1, &row(json!({"description": null})));
        assert!(q.sql.contains(r#"SET "description" = $1::VARCHAR"#));
        assert_eq!(q.params, vec![Value::Null, json!(1)]);
    }

    #[test]
    fn delete_returns_id() {
        let q = delete(&SANDWICHES, 4);
        assert_eq!(
            q.sql,
            r#"DELETE FROM "sandwiches" WHERE "id" = $1::INTEGER RETURNING "id""#
        );
    }
}
