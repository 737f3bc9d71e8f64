//! In-memory `Store` so the router can be exercised without PostgreSQL.

use async_trait::async_trait;
use sandwich_api::{AppError, ColumnKind, Row, Store, TableDef};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Row>,
}

/// Keeps rows per table in id order and assigns ids the way a SERIAL column does.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn column_default(kind: ColumnKind, expr: &str) -> Value {
    match kind {
        ColumnKind::Timestamp => Value::String(chrono::Utc::now().to_rfc3339()),
        ColumnKind::Int => expr.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
        ColumnKind::Text | ColumnKind::Decimal => Value::String(expr.to_string()),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, table: &'static TableDef, values: Row) -> Result<Row, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let t = tables.entry(table.name).or_default();
        t.last_id += 1;
        let mut row = Row::new();
        row.insert("id".into(), Value::from(t.last_id));
        for c in table.columns {
            let v = match (values.get(c.name), c.default) {
                (Some(v), _) => v.clone(),
                (None, Some(expr)) => column_default(c.kind, expr),
                (None, None) => Value::Null,
            };
            row.insert(c.name.into(), v);
        }
        t.rows.insert(t.last_id, row.clone());
        Ok(row)
    }

    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(table.name)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn select_by_id(&self, table: &'static TableDef, id: i32) -> Result<Option<Row>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.get(table.name).and_then(|t| t.rows.get(&id).cloned()))
    }

    async fn update(
        &self,
        table: &'static TableDef,
        id: i32,
        values: Row,
    ) -> Result<Option<Row>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables.get_mut(table.name).and_then(|t| t.rows.get_mut(&id)) else {
            return Ok(None);
        };
        for c in table.columns {
            if let Some(v) = values.get(c.name) {
                row.insert(c.name.into(), v.clone());
            }
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, table: &'static TableDef, id: i32) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .get_mut(table.name)
            .map(|t| t.rows.remove(&id).is_some())
            .unwrap_or(false))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// A store whose database is unreachable: every call fails the way an exhausted pool does.
pub struct DownStore;

fn unavailable() -> AppError {
    AppError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl Store for DownStore {
    async fn insert(&self, _table: &'static TableDef, _values: Row) -> Result<Row, AppError> {
        Err(unavailable())
    }

    async fn select_all(&self, _table: &'static TableDef) -> Result<Vec<Row>, AppError> {
        Err(unavailable())
    }

    async fn select_by_id(&self, _table: &'static TableDef, _id: i32) -> Result<Option<Row>, AppError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _table: &'static TableDef,
        _id: i32,
        _values: Row,
    ) -> Result<Option<Row>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _table: &'static TableDef, _id: i32) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}
