use crate::commands::resolve_config;
use clap::Args;
use common::error::GenError;
use common::types::LowCardinalityDepth;
use generator::{generate_script, write_script, ScriptOptions};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// YAML list of type descriptors; defaults to the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Write the script here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Table name prefix
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Table engine clause, e.g. `Memory()`
    #[arg(long, value_name = "ENGINE")]
    pub engine: Option<String>,

    /// Also emit LowCardinality variants of the triple-nested arrays
    #[arg(long)]
    pub nested_low_cardinality: bool,
}

impl GenerateArgs {
    fn apply(&self, options: &mut ScriptOptions) {
        if let Some(prefix) = &self.prefix {
            options.table_prefix = prefix.clone();
        }
        if let Some(engine) = &self.engine {
            options.engine = engine.clone();
        }
        if self.nested_low_cardinality {
            options.low_cardinality_depth = LowCardinalityDepth::Nested;
        }
    }
}

/// Emit the fixture script to the configured output, or stdout.
pub fn handle_generate(args: &GenerateArgs, config_path: Option<PathBuf>) -> Result<(), GenError> {
    let config = resolve_config(config_path, args.catalog.as_deref())?;
    let mut options = ScriptOptions::from_project(&config.project);
    args.apply(&mut options);

    match args.output.clone().or(config.output) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(GenError::generate)?;
            }
            // the output file is only opened once the whole script rendered
            let script =
                generate_script(&config.catalog, &options).map_err(GenError::generate)?;
            fs::write(&path, script).map_err(GenError::generate)?;
            info!("wrote {} tables to {}", config.catalog.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_script(&config.catalog, &options, &mut writer).map_err(GenError::generate)?;
            writer.flush().map_err(GenError::generate)?;
        }
    }
    Ok(())
}
