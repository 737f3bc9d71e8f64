//! Static table descriptors and the `Entity` trait tying a table to its typed schemas.

use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

/// Row as it travels between the store and the typed schemas: column name to JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Name of the primary key column shared by every table.
pub const PK_COLUMN: &str = "id";

/// Value shape of a column. Decides bind casts and how a fetched cell is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Text,
    Decimal,
    Timestamp,
}

impl ColumnKind {
    /// Base PostgreSQL type used in `$n::type` casts (no length or precision modifiers,
    /// so oversized values fail on assignment instead of being truncated by the cast).
    pub fn cast(self) -> &'static str {
        match self {
            ColumnKind::Int => "INTEGER",
            ColumnKind::Text => "VARCHAR",
            ColumnKind::Decimal => "NUMERIC",
            ColumnKind::Timestamp => "TIMESTAMPTZ",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Full DDL type, e.g. `VARCHAR(100)` or `NUMERIC(4, 2)`.
    pub sql_type: &'static str,
    pub nullable: bool,
    pub unique: bool,
    /// SQL default expression; columns with a default are omitted from INSERT when unset.
    pub default: Option<&'static str>,
    /// Referenced table for a foreign key (always its `id`).
    pub references: Option<&'static str>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, kind: ColumnKind, sql_type: &'static str) -> Self {
        ColumnDef {
            name,
            kind,
            sql_type,
            nullable: false,
            unique: false,
            default: None,
            references: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn default(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    pub const fn references(mut self, table: &'static str) -> Self {
        self.references = Some(table);
        self
    }
}

/// A table with a SERIAL `id` primary key followed by `columns`.
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    /// Human-readable entity name used in error messages ("Order Detail").
    pub label: &'static str,
    /// OpenAPI tag ("Order Details").
    pub tag: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn not_found(&self) -> String {
        format!("{} not found", self.label)
    }
}

/// A CRUD-exposed entity: the read shape plus its create and update payloads.
///
/// Rows are converted through serde, so field names of all three shapes must match
/// the column names in `TABLE`.
pub trait Entity: Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static {
    type Create: Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static;
    type Update: Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static;

    const TABLE: &'static TableDef;
}
