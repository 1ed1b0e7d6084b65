use crate::commands::resolve_config;
use clap::Args;
use common::error::GenError;
use generator::{ScriptOptions, TableSpec};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// YAML list of type descriptors; defaults to the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Print full table specs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the table matrix without rendering SQL.
pub fn handle_list(args: &ListArgs, config_path: Option<PathBuf>) -> Result<(), GenError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    list_tables(args, config_path, &mut out)
}

pub fn list_tables<W: Write>(
    args: &ListArgs,
    config_path: Option<PathBuf>,
    out: &mut W,
) -> Result<(), GenError> {
    let config = resolve_config(config_path, args.catalog.as_deref())?;
    config.catalog.validate().map_err(GenError::generate)?;
    let options = ScriptOptions::from_project(&config.project);

    let tables: Vec<TableSpec> = config
        .catalog
        .iter()
        .map(|descriptor| TableSpec::build(descriptor, &options))
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &tables).map_err(GenError::generate)?;
        writeln!(out).map_err(GenError::generate)?;
    } else {
        for table in &tables {
            writeln!(
                out,
                "{}\t{}\tlow_cardinality={}",
                table.name,
                table.descriptor.sql_type(),
                table.low_cardinality
            )
            .map_err(GenError::generate)?;
        }
    }
    Ok(())
}
