use crate::options::ScriptOptions;
use crate::policy::supports_low_cardinality;
use common::types::{LowCardinalityDepth, TypeDescriptor};
use serde::Serialize;

const ID_COLUMN: (&str, &str) = ("id", "Int8");
const NESTED_ARRAY_DEPTH: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub sql_type: String,
}

impl ColumnSpec {
    fn new(name: &str, sql_type: String) -> Self {
        Self {
            name: name.to_string(),
            sql_type,
        }
    }
}

/// Everything needed to render one fixture table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub low_cardinality: bool,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn build(descriptor: &TypeDescriptor, options: &ScriptOptions) -> Self {
        let sql_type = descriptor.sql_type();
        let low_cardinality = supports_low_cardinality(sql_type);

        let mut columns = base_columns(sql_type);
        if low_cardinality {
            columns.extend(low_cardinality_columns(
                sql_type,
                options.low_cardinality_depth,
            ));
        }

        Self {
            name: table_name(&options.table_prefix, descriptor),
            descriptor: descriptor.clone(),
            low_cardinality,
            columns,
        }
    }

    /// Column names in declaration order, e.g. for an `INSERT` column list.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

pub fn table_name(prefix: &str, descriptor: &TypeDescriptor) -> String {
    format!("{prefix}{}", descriptor.table_ident().to_lowercase())
}

/// `id` followed by the plain, nullable and array variants of `sql_type`.
pub fn base_columns(sql_type: &str) -> Vec<ColumnSpec> {
    let nullable_t = nullable(sql_type);
    vec![
        ColumnSpec::new(ID_COLUMN.0, ID_COLUMN.1.to_string()),
        ColumnSpec::new("simple_t", sql_type.to_string()),
        ColumnSpec::new("nullable_t", nullable_t.clone()),
        ColumnSpec::new("array_t", array(sql_type, 1)),
        ColumnSpec::new("array3_t", array(sql_type, NESTED_ARRAY_DEPTH)),
        ColumnSpec::new("nullable_array_t", array(&nullable_t, 1)),
        ColumnSpec::new("nullable_array3_t", array(&nullable_t, NESTED_ARRAY_DEPTH)),
    ]
}

pub fn low_cardinality_columns(sql_type: &str, depth: LowCardinalityDepth) -> Vec<ColumnSpec> {
    let lc_t = low_cardinality(sql_type);
    let nullable_lc_t = low_cardinality(&nullable(sql_type));

    match depth {
        LowCardinalityDepth::Flat => vec![
            ColumnSpec::new("simple_lc_t", lc_t.clone()),
            ColumnSpec::new("nullable_lc_t", nullable_lc_t.clone()),
            ColumnSpec::new("array_lc_t", array(&lc_t, 1)),
            ColumnSpec::new("nullable_array_lc_t", array(&nullable_lc_t, 1)),
        ],
        LowCardinalityDepth::Nested => vec![
            ColumnSpec::new("simple_lc_t", lc_t.clone()),
            ColumnSpec::new("nullable_lc_t", nullable_lc_t.clone()),
            ColumnSpec::new("array_lc_t", array(&lc_t, 1)),
            ColumnSpec::new("array3_lc_t", array(&lc_t, NESTED_ARRAY_DEPTH)),
            ColumnSpec::new("nullable_array_lc_t", array(&nullable_lc_t, 1)),
            ColumnSpec::new(
                "nullable_array3_lc_t",
                array(&nullable_lc_t, NESTED_ARRAY_DEPTH),
            ),
        ],
    }
}

fn nullable(sql_type: &str) -> String {
    format!("Nullable({sql_type})")
}

fn low_cardinality(sql_type: &str) -> String {
    format!("LowCardinality({sql_type})")
}

fn array(sql_type: &str, depth: usize) -> String {
    (0..depth).fold(sql_type.to_string(), |inner, _| format!("Array({inner})"))
}
