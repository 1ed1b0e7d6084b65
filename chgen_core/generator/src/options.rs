use common::config::project::ProjectConfig;
use common::types::LowCardinalityDepth;

pub const DEFAULT_TABLE_PREFIX: &str = "vertx_test_";
pub const DEFAULT_ENGINE: &str = "Memory()";
pub const DEFAULT_SETTINGS: &[&str] = &[
    "allow_suspicious_low_cardinality_types = 1",
    "allow_experimental_bigint_types = 1",
];

/// Knobs for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptOptions {
    pub table_prefix: String,
    pub engine: String,
    /// Session settings emitted as `SET <setting>;` before any table.
    pub settings: Vec<String>,
    pub low_cardinality_depth: LowCardinalityDepth,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
            settings: DEFAULT_SETTINGS.iter().map(|s| s.to_string()).collect(),
            low_cardinality_depth: LowCardinalityDepth::default(),
        }
    }
}

impl ScriptOptions {
    /// Defaults overlaid with whatever the project file sets.
    pub fn from_project(project: &ProjectConfig) -> Self {
        let defaults = Self::default();
        Self {
            table_prefix: project
                .table_prefix
                .clone()
                .unwrap_or(defaults.table_prefix),
            engine: project.engine.clone().unwrap_or(defaults.engine),
            settings: project.settings.clone().unwrap_or(defaults.settings),
            low_cardinality_depth: project
                .low_cardinality_depth
                .unwrap_or(defaults.low_cardinality_depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_project_keeps_defaults() {
        let project = ProjectConfig {
            name: "p".into(),
            ..Default::default()
        };
        assert_eq!(ScriptOptions::from_project(&project), ScriptOptions::default());
    }

    #[test]
    fn project_overrides_each_field() {
        let project = ProjectConfig {
            name: "p".into(),
            table_prefix: Some("t_".into()),
            engine: Some("Log".into()),
            settings: Some(vec![]),
            low_cardinality_depth: Some(LowCardinalityDepth::Nested),
            ..Default::default()
        };
        let options = ScriptOptions::from_project(&project);
        assert_eq!(options.table_prefix, "t_");
        assert_eq!(options.engine, "Log");
        assert!(options.settings.is_empty());
        assert_eq!(options.low_cardinality_depth, LowCardinalityDepth::Nested);
    }
}
