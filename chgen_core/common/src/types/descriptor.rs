use serde::{Deserialize, Serialize};
use std::fmt;

/// One ClickHouse column type under test.
///
/// Either a bare type name (`UUID`), where the name doubles as the table
/// identifier, or a `{ table, type }` pair for parameterized types such as
/// `DateTime64(3)` or enums whose expression is unusable as an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Bare(String),
    Named {
        table: String,
        #[serde(rename = "type")]
        sql_type: String,
    },
}

impl TypeDescriptor {
    pub fn bare(name: impl Into<String>) -> Self {
        TypeDescriptor::Bare(name.into())
    }

    pub fn named(table: impl Into<String>, sql_type: impl Into<String>) -> Self {
        TypeDescriptor::Named {
            table: table.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Short identifier the table name is derived from.
    pub fn table_ident(&self) -> &str {
        match self {
            TypeDescriptor::Bare(name) => name,
            TypeDescriptor::Named { table, .. } => table,
        }
    }

    /// Full SQL type expression placed in the column definitions.
    pub fn sql_type(&self) -> &str {
        match self {
            TypeDescriptor::Bare(name) => name,
            TypeDescriptor::Named { sql_type, .. } => sql_type,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Bare(name) => f.write_str(name),
            TypeDescriptor::Named { table, sql_type } => write!(f, "{table}: {sql_type}"),
        }
    }
}
