//! Bootstrap the schema: CREATE TABLE IF NOT EXISTS for every table descriptor.
//! Tables are created in the order given, so parents must precede the tables that reference them.

use crate::error::AppError;
use crate::model::{TableDef, PK_COLUMN};
use crate::sql::quoted;
use sqlx::PgPool;

/// DDL for one table: SERIAL `id` primary key, then the descriptor's columns with their
/// nullability, uniqueness, defaults and foreign keys.
pub fn create_table_sql(table: &TableDef) -> String {
    let mut col_defs = vec![format!("{} SERIAL PRIMARY KEY", quoted(PK_COLUMN))];
    for c in table.columns {
        let mut def = format!("{} {}", quoted(c.name), c.sql_type);
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if c.unique {
            def.push_str(" UNIQUE");
        }
        if let Some(d) = c.default {
            def.push_str(" DEFAULT ");
            def.push_str(d);
        }
        if let Some(parent) = c.references {
            def.push_str(&format!(" REFERENCES {} ({})", quoted(parent), quoted(PK_COLUMN)));
        }
        col_defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(table.name),
        col_defs.join(",\n  ")
    )
}

/// Create any missing tables. Existing tables are left as they are.
pub async fn apply_migrations(pool: &PgPool, tables: &[&TableDef]) -> Result<(), AppError> {
    for t in tables {
        let sql = create_table_sql(t);
        tracing::debug!(table = t.name, sql = %sql, "ensure table");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!(count = tables.len(), "schema ready");
    Ok(())
}
