use crate::columns::TableSpec;
use crate::error::GenerateError;
use crate::options::ScriptOptions;
use common::types::TypeCatalog;
use minijinja::{context, Environment};
use std::io::Write;
use tracing::{debug, info};

const CREATE_TABLE_TEMPLATE_NAME: &str = "create_table.sql";
const CREATE_TABLE_TEMPLATE: &str = include_str!("templates/create_table.sql.j2");

fn build_env() -> Result<Environment<'static>, GenerateError> {
    let mut env = Environment::new();
    env.add_template(CREATE_TABLE_TEMPLATE_NAME, CREATE_TABLE_TEMPLATE)?;
    Ok(env)
}

/// One `SET <setting>;` line per configured session setting.
pub fn render_preamble(options: &ScriptOptions) -> String {
    options
        .settings
        .iter()
        .map(|setting| format!("SET {setting};\n"))
        .collect()
}

/// Renders the `DROP TABLE IF EXISTS` / `CREATE TABLE` pair for `table`.
pub fn render_table(table: &TableSpec, options: &ScriptOptions) -> Result<String, GenerateError> {
    let env = build_env()?;
    render_with(&env, table, options)
}

fn render_with(
    env: &Environment<'_>,
    table: &TableSpec,
    options: &ScriptOptions,
) -> Result<String, GenerateError> {
    let template = env.get_template(CREATE_TABLE_TEMPLATE_NAME)?;
    let mut rendered = template.render(context! {
        table => table,
        engine => &options.engine,
    })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Validates `catalog` and renders the full fixture script: session
/// settings first, then every table in catalog order.
pub fn generate_script(
    catalog: &TypeCatalog,
    options: &ScriptOptions,
) -> Result<String, GenerateError> {
    catalog.validate()?;
    let env = build_env()?;

    let mut script = render_preamble(options);
    for descriptor in catalog {
        let table = TableSpec::build(descriptor, options);
        debug!(
            descriptor = %descriptor,
            table = %table.name,
            low_cardinality = table.low_cardinality,
            columns = table.columns.len(),
            "rendering table"
        );
        if !script.is_empty() {
            script.push('\n');
        }
        script.push_str(&render_with(&env, &table, options)?);
    }

    info!(tables = catalog.len(), "generated fixture script");
    Ok(script)
}

/// [`generate_script`], written to `writer`. Returns the number of tables.
pub fn write_script<W: Write>(
    catalog: &TypeCatalog,
    options: &ScriptOptions,
    writer: &mut W,
) -> Result<usize, GenerateError> {
    let script = generate_script(catalog, options)?;
    writer.write_all(script.as_bytes())?;
    writer.flush()?;
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::{builtin_catalog, CatalogError, TypeDescriptor};

    fn count_tables(script: &str) -> usize {
        script.matches("CREATE TABLE ").count()
    }

    #[test]
    fn preamble_enables_required_settings() {
        assert_eq!(
            render_preamble(&ScriptOptions::default()),
            "SET allow_suspicious_low_cardinality_types = 1;\nSET allow_experimental_bigint_types = 1;\n"
        );
    }

    #[test]
    fn renders_uuid_table() {
        let options = ScriptOptions::default();
        let table = TableSpec::build(&TypeDescriptor::bare("UUID"), &options);
        let sql = render_table(&table, &options).unwrap();
        let expected = "\
DROP TABLE IF EXISTS vertx_test_uuid;
CREATE TABLE vertx_test_uuid (
    id Int8,
    simple_t UUID,
    nullable_t Nullable(UUID),
    array_t Array(UUID),
    array3_t Array(Array(Array(UUID))),
    nullable_array_t Array(Nullable(UUID)),
    nullable_array3_t Array(Array(Array(Nullable(UUID))))
) ENGINE = Memory();
";
        assert_eq!(sql, expected);
    }

    #[test]
    fn enum_quotes_are_not_escaped() {
        let options = ScriptOptions::default();
        let table = TableSpec::build(
            &TypeDescriptor::named("Enum16", "Enum16('aa' = 1, 'bb' = 2)"),
            &options,
        );
        let sql = render_table(&table, &options).unwrap();
        assert!(sql.contains("    simple_t Enum16('aa' = 1, 'bb' = 2),\n"));
        assert!(!sql.contains("LowCardinality"));
    }

    #[test]
    fn custom_engine_and_prefix() {
        let options = ScriptOptions {
            table_prefix: "it_".into(),
            engine: "Log".into(),
            ..Default::default()
        };
        let table = TableSpec::build(&TypeDescriptor::bare("Int8"), &options);
        let sql = render_table(&table, &options).unwrap();
        assert!(sql.starts_with("DROP TABLE IF EXISTS it_int8;\nCREATE TABLE it_int8 (\n"));
        assert!(sql.ends_with("    nullable_array_lc_t Array(LowCardinality(Nullable(Int8)))\n) ENGINE = Log;\n"));
    }

    #[test]
    fn script_covers_whole_catalog_in_order() {
        let catalog = builtin_catalog();
        let script = generate_script(&catalog, &ScriptOptions::default()).unwrap();

        assert!(script.starts_with("SET allow_suspicious_low_cardinality_types = 1;\n"));
        assert_eq!(count_tables(&script), catalog.len());
        assert_eq!(script.matches("DROP TABLE IF EXISTS ").count(), catalog.len());
        assert_eq!(script.matches(") ENGINE = Memory();").count(), catalog.len());

        let int8 = script.find("CREATE TABLE vertx_test_int8 (").unwrap();
        let ipv4 = script.find("CREATE TABLE vertx_test_ipv4 (").unwrap();
        assert!(int8 < ipv4);
        assert!(script.ends_with(") ENGINE = Memory();\n"));
    }

    #[test]
    fn parentheses_balance_per_statement() {
        let script = generate_script(&builtin_catalog(), &ScriptOptions::default()).unwrap();
        for statement in script.split(";\n").filter(|s| !s.trim().is_empty()) {
            let open = statement.matches('(').count();
            let close = statement.matches(')').count();
            assert_eq!(open, close, "unbalanced: {statement}");
        }
    }

    #[test]
    fn duplicate_tables_abort_generation() {
        let catalog = TypeCatalog::new(vec![
            TypeDescriptor::bare("String"),
            TypeDescriptor::named("STRING", "String"),
        ]);
        let err = generate_script(&catalog, &ScriptOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::Catalog(_)));
    }

    #[test]
    fn malformed_identifiers_never_reach_ddl() {
        let catalog = TypeCatalog::new(vec![
            TypeDescriptor::bare(" Int8"),
            TypeDescriptor::bare("FixedString(12)"),
        ]);
        let err = generate_script(&catalog, &ScriptOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Catalog(CatalogError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn empty_catalog_yields_only_settings() {
        let script = generate_script(&TypeCatalog::default(), &ScriptOptions::default()).unwrap();
        assert_eq!(script, render_preamble(&ScriptOptions::default()));
    }

    #[test]
    fn no_settings_means_no_leading_blank_line() {
        let options = ScriptOptions {
            settings: vec![],
            ..Default::default()
        };
        let catalog = TypeCatalog::new(vec![TypeDescriptor::bare("Date")]);
        let script = generate_script(&catalog, &options).unwrap();
        assert!(script.starts_with("DROP TABLE IF EXISTS vertx_test_date;\n"));
    }

    #[test]
    fn write_script_streams_to_writer() {
        let catalog = TypeCatalog::new(vec![TypeDescriptor::bare("Float64")]);
        let mut buf = Vec::new();
        let written = write_script(&catalog, &ScriptOptions::default(), &mut buf).unwrap();
        assert_eq!(written, 1);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("CREATE TABLE vertx_test_float64 ("));
    }
}
