use crate::error::diagnostics::DiagnosticMessage;
use crate::types::descriptor::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

const ENUM8_VALUES: &str =
    "'v0' = -128, 'v1' = -2, 'v2' = -1, 'v3' = 0, 'v4' = 1, 'v5' = 2, 'v6' = 127";
const ENUM16_VALUES: &str =
    "'v0' = -32768, 'v1' = -2, 'v2' = -1, 'v3' = 0, 'v4' = 1, 'v5' = 2, 'v6' = 32767";
const DECIMAL_SCALE: u8 = 4;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate table: {context}")]
    DuplicateTable { context: DiagnosticMessage },
    #[error("empty table identifier: {context}")]
    EmptyIdentifier { context: DiagnosticMessage },
    #[error("empty type expression: {context}")]
    EmptyType { context: DiagnosticMessage },
    #[error("invalid table identifier: {context}")]
    InvalidIdentifier { context: DiagnosticMessage },
}

impl CatalogError {
    #[track_caller]
    pub fn duplicate_table(ident: &str, first: &str) -> Self {
        Self::DuplicateTable {
            context: crate::diag!(
                "'{}' lowercases to the same table name as '{}'",
                ident,
                first
            ),
        }
    }

    #[track_caller]
    pub fn empty_identifier(position: usize) -> Self {
        Self::EmptyIdentifier {
            context: crate::diag!("descriptor #{} has no table name", position),
        }
    }

    #[track_caller]
    pub fn invalid_identifier(ident: &str) -> Self {
        Self::InvalidIdentifier {
            context: crate::diag!(
                "'{}' may only contain ASCII letters, digits and underscores",
                ident
            ),
        }
    }

    #[track_caller]
    pub fn empty_type(ident: &str) -> Self {
        Self::EmptyType {
            context: crate::diag!("descriptor '{}' has no type", ident),
        }
    }
}

/// Ordered list of type descriptors; output follows this order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    descriptors: Vec<TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new(descriptors: Vec<TypeDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Checks that every descriptor is usable and that no two map onto the
    /// same (lowercased) table name.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (idx, descriptor) in self.descriptors.iter().enumerate() {
            let ident = descriptor.table_ident();
            if ident.trim().is_empty() {
                return Err(CatalogError::empty_identifier(idx));
            }
            if !is_identifier(ident) {
                return Err(CatalogError::invalid_identifier(ident));
            }
            if descriptor.sql_type().trim().is_empty() {
                return Err(CatalogError::empty_type(ident));
            }
            if let Some(first) = seen.insert(ident.to_lowercase(), ident) {
                return Err(CatalogError::duplicate_table(ident, first));
            }
        }
        Ok(())
    }
}

/// Table identifiers end up unquoted in DDL, so they stay within `[A-Za-z0-9_]+`.
fn is_identifier(ident: &str) -> bool {
    !ident.is_empty()
        && ident
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Elementary ClickHouse types covered by the client's all-types suite.
pub fn builtin_catalog() -> TypeCatalog {
    use crate::types::descriptor::TypeDescriptor as D;

    let mut descriptors: Vec<TypeDescriptor> = [
        "Int8", "UInt8", "Int16", "UInt16", "Int32", "UInt32", "Int64", "UInt64", "Int128",
        "UInt128", "Int256", "UInt256", "String",
    ]
    .into_iter()
    .map(D::bare)
    .collect();

    descriptors.extend([
        D::named("FixedString", "FixedString(12)"),
        D::bare("DateTime"),
        D::named("datetime64", "DateTime64(3)"),
        D::bare("Date"),
        D::bare("UUID"),
    ]);
    descriptors.extend(
        ["Decimal32", "Decimal64", "Decimal128", "Decimal256"]
            .into_iter()
            .map(|name| D::named(name, format!("{name}({DECIMAL_SCALE})"))),
    );
    descriptors.extend([
        D::named("Enum8", format!("Enum8({ENUM8_VALUES})")),
        D::named("Enum16", format!("Enum16({ENUM16_VALUES})")),
        D::bare("Float32"),
        D::bare("Float64"),
        D::bare("IPv6"),
        D::bare("IPv4"),
    ]);

    TypeCatalog::new(descriptors)
}
