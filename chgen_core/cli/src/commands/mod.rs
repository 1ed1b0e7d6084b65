pub mod generate;
pub mod init;
pub mod list;

pub use generate::{handle_generate, GenerateArgs};
pub use init::{handle_init, InitArgs};
pub use list::{handle_list, ListArgs};

use common::config::loader::{load_catalog, read_config, GeneratorConfig};
use common::error::GenError;
use std::path::{Path, PathBuf};

/// Project config with the catalog swapped for `catalog_override` when given.
pub(crate) fn resolve_config(
    config_path: Option<PathBuf>,
    catalog_override: Option<&Path>,
) -> Result<GeneratorConfig, GenError> {
    let mut config = read_config(config_path)?;
    if let Some(path) = catalog_override {
        config.catalog = load_catalog(path)?;
    }
    if config.catalog.is_empty() {
        return Err(GenError::generate_msg(
            "type catalog contains no descriptors, nothing to generate",
        ));
    }
    Ok(config)
}
