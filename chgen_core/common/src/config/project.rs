use crate::types::LowCardinalityDepth;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ---------------- chgen project config ----------------
/// Contents of `chgen-project.yml`. Every knob is optional; unset values
/// fall back to the generator defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub table_prefix: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub low_cardinality_depth: Option<LowCardinalityDepth>,
    #[serde(default)]
    pub settings: Option<Vec<String>>,
    /// Catalog YAML, relative to the project file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Output SQL file, relative to the project file.
    #[serde(default)]
    pub output: Option<PathBuf>,
}
