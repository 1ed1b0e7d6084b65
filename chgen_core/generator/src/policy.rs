/// Type prefixes never wrapped in `LowCardinality(...)`.
const NO_LOW_CARDINALITY_PREFIXES: &[&str] = &[
    "DateTime64",
    "Decimal32(",
    "Decimal64(",
    "Decimal128(",
    "Decimal256(",
    "Enum",
];

/// Whether the fixture should carry `LowCardinality` variants for `sql_type`.
pub fn supports_low_cardinality(sql_type: &str) -> bool {
    let sql_type = sql_type.trim();
    sql_type != "UUID"
        && !NO_LOW_CARDINALITY_PREFIXES
            .iter()
            .any(|prefix| sql_type.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::builtin_catalog;

    #[test]
    fn excluded_types() {
        for ty in [
            "UUID",
            "DateTime64(3)",
            "DateTime64(6, 'Europe/Moscow')",
            "Decimal32(4)",
            "Decimal64(4)",
            "Decimal128(10)",
            "Decimal256(4)",
            "Enum8('v0' = -128, 'v1' = 2)",
            "Enum16('aa' = 1)",
        ] {
            assert!(!supports_low_cardinality(ty), "{ty} should be excluded");
        }
    }

    #[test]
    fn elementary_types_allow_low_cardinality() {
        for ty in [
            "Int8", "UInt64", "Int256", "String", "FixedString(12)", "DateTime", "Date",
            "Float32", "Float64", "IPv4", "IPv6",
        ] {
            assert!(supports_low_cardinality(ty), "{ty} should allow LowCardinality");
        }
    }

    #[test]
    fn bare_decimal_is_not_a_parameterization() {
        // only the scale-parameterized spellings are excluded
        assert!(supports_low_cardinality("Decimal"));
    }

    #[test]
    fn builtin_catalog_split() {
        let excluded: Vec<String> = builtin_catalog()
            .iter()
            .filter(|d| !supports_low_cardinality(d.sql_type()))
            .map(|d| d.table_ident().to_string())
            .collect();
        assert_eq!(
            excluded,
            vec![
                "datetime64",
                "UUID",
                "Decimal32",
                "Decimal64",
                "Decimal128",
                "Decimal256",
                "Enum8",
                "Enum16"
            ]
        );
    }
}
