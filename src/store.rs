//! Persistence layer: the `Store` trait and its PostgreSQL implementation.

use crate::error::{AppError, ConfigError};
use crate::model::{ColumnKind, Row, TableDef, PK_COLUMN};
use crate::sql::{self, PgBindValue, QueryBuf};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPool, PgRow};
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Row-level CRUD over one table at a time. Rows are column-name maps; callers own the
/// conversion to typed records.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert one row and return it as stored (generated id and defaults included).
    async fn insert(&self, table: &'static TableDef, values: Row) -> Result<Row, AppError>;

    /// All rows, id ascending.
    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError>;

    async fn select_by_id(&self, table: &'static TableDef, id: i32) -> Result<Option<Row>, AppError>;

    /// Write the columns present in `values`. `None` when no row has this id.
    async fn update(
        &self,
        table: &'static TableDef,
        id: i32,
        values: Row,
    ) -> Result<Option<Row>, AppError>;

    /// `false` when no row has this id.
    async fn delete(&self, table: &'static TableDef, id: i32) -> Result<bool, AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}

/// `Store` backed by a shared sqlx pool. Each statement checks out one pooled
/// connection and hands it back when the query future completes or is dropped.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    async fn fetch_optional(&self, table: &TableDef, q: &QueryBuf) -> Result<Option<Row>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let row = query.fetch_optional(&self.pool).await?;
        row.map(|r| row_to_json(table, &r)).transpose()
    }

    async fn fetch_all(&self, table: &TableDef, q: &QueryBuf) -> Result<Vec<Row>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(|r| row_to_json(table, r)).collect()
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert(&self, table: &'static TableDef, values: Row) -> Result<Row, AppError> {
        let q = sql::insert(table, &values);
        self.fetch_optional(table, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn select_all(&self, table: &'static TableDef) -> Result<Vec<Row>, AppError> {
        let q = sql::select_all(table);
        self.fetch_all(table, &q).await
    }

    async fn select_by_id(&self, table: &'static TableDef, id: i32) -> Result<Option<Row>, AppError> {
        let q = sql::select_by_id(table, id);
        self.fetch_optional(table, &q).await
    }

    async fn update(
        &self,
        table: &'static TableDef,
        id: i32,
        values: Row,
    ) -> Result<Option<Row>, AppError> {
        let q = sql::update(table, id, &values);
        self.fetch_optional(table, &q).await
    }

    async fn delete(&self, table: &'static TableDef, id: i32) -> Result<bool, AppError> {
        let q = sql::delete(table, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        Ok(query.fetch_optional(&self.pool).await?.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

/// Decode a fetched row into a JSON map, one cell per descriptor column.
fn row_to_json(table: &TableDef, row: &PgRow) -> Result<Row, AppError> {
    use sqlx::Row as _;
    let mut map = Row::new();
    let id: i32 = row.try_get(PK_COLUMN)?;
    map.insert(PK_COLUMN.to_string(), Value::from(id));
    for c in table.columns {
        let v = match c.kind {
            ColumnKind::Int => row.try_get::<Option<i32>, _>(c.name)?.map(Value::from),
            ColumnKind::Text => row.try_get::<Option<String>, _>(c.name)?.map(Value::String),
            ColumnKind::Decimal => row
                .try_get::<Option<rust_decimal::Decimal>, _>(c.name)?
                .map(serde_json::to_value)
                .transpose()?,
            ColumnKind::Timestamp => row
                .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(c.name)?
                .map(|d| Value::String(d.to_rfc3339())),
        };
        map.insert(c.name.to_string(), v.unwrap_or(Value::Null));
    }
    Ok(map)
}

/// Create the database named in `database_url` when it does not exist yet, connecting
/// through the `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_db_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", sql::quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split `postgres://host/db?opts` into (`postgres://host/postgres?opts`, `db`).
fn split_db_name(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::DatabaseUrl("no database path".into()))?;
    let (base, path_and_query) = url.split_at(path_start);
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((db, q)) => (db, Some(q)),
        None => (path_and_query, None),
    };
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.trim().to_string()))
}
