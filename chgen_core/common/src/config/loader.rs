use crate::config::error::ConfigError;
use crate::config::project::ProjectConfig;
use crate::types::{builtin_catalog, TypeCatalog};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE_NAME: &str = "chgen-project.yml";
pub const CATALOG_FILE_NAME: &str = "types.yml";

/// Project settings together with the catalog they point at.
#[derive(Debug)]
pub struct GeneratorConfig {
    pub project: ProjectConfig,
    pub catalog: TypeCatalog,
    /// `project.output` resolved against the project directory.
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            catalog: builtin_catalog(),
            output: None,
        }
    }
}

/// Reads a YAML list of type descriptors.
pub fn load_catalog(path: &Path) -> Result<TypeCatalog, ConfigError> {
    info!("loading type catalog from {}", path.display());
    let file = fs::File::open(path).map_err(|e| ConfigError::in_file(path, e))?;
    let catalog: TypeCatalog =
        serde_yaml::from_reader(file).map_err(|e| ConfigError::in_file(path, e))?;
    debug!("loaded {} type descriptors", catalog.len());
    Ok(catalog)
}

/// Loads `chgen-project.yml` from `config_path` (or the working directory).
///
/// An explicit `config_path` must contain the project file. Without one, a
/// missing project file yields the defaults and the built-in catalog.
pub fn read_config(config_path: Option<PathBuf>) -> Result<GeneratorConfig, ConfigError> {
    let explicit = config_path.is_some();
    let proj_config_file_path = match config_path {
        Some(dir) => dir.join(PROJECT_FILE_NAME),
        None => PathBuf::from(PROJECT_FILE_NAME),
    };

    if !proj_config_file_path.exists() {
        if explicit {
            return Err(ConfigError::incorrect_path(&proj_config_file_path));
        }
        debug!("no {} found, using defaults", PROJECT_FILE_NAME);
        return Ok(GeneratorConfig::default());
    }

    info!("loading project from {}", proj_config_file_path.display());
    let project_file = fs::File::open(&proj_config_file_path)
        .map_err(|e| ConfigError::in_file(&proj_config_file_path, e))?;
    let project: ProjectConfig = serde_yaml::from_reader(project_file)
        .map_err(|e| ConfigError::in_file(&proj_config_file_path, e))?;
    if project.name.trim().is_empty() {
        return Err(ConfigError::parse_error(format!(
            "{}: `name` must not be empty",
            proj_config_file_path.display()
        )));
    }

    let config_root = proj_config_file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let catalog = match &project.catalog {
        Some(path) => {
            let resolved = resolve_path(&config_root, path);
            if !resolved.exists() {
                return Err(ConfigError::incorrect_path(&resolved));
            }
            load_catalog(&resolved)?
        }
        None => builtin_catalog(),
    };
    let output = project
        .output
        .as_ref()
        .map(|path| resolve_path(&config_root, path));

    Ok(GeneratorConfig {
        project,
        catalog,
        output,
    })
}

pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
