use clap::Args;
use common::config::loader::{CATALOG_FILE_NAME, PROJECT_FILE_NAME};
use common::error::GenError;
use common::types::builtin_catalog;
use generator::options::{DEFAULT_ENGINE, DEFAULT_SETTINGS, DEFAULT_TABLE_PREFIX};
use log::info;
use minijinja::{context, Environment};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_TEMPLATE_NAME: &str = "project";
const PROJECT_TEMPLATE: &str = include_str!("templates/chgen-project.yml.j2");

const CATALOG_HEADER: &str =
    "# One entry per table: a bare type name, or `table:` + `type:` for parameterized types.\n";

const DEFAULT_PROJECT_NAME: &str = "clickhouse-all-types";
const DEFAULT_OUTPUT: &str = "all_types.sql";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to scaffold
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Project name written into the project file
    #[arg(long = "name")]
    pub project_name: Option<String>,
}

fn render_project(name: &str) -> Result<String, GenError> {
    let mut env = Environment::new();
    env.add_template(PROJECT_TEMPLATE_NAME, PROJECT_TEMPLATE)
        .map_err(GenError::init)?;
    let mut rendered = env
        .get_template(PROJECT_TEMPLATE_NAME)
        .and_then(|tmpl| {
            tmpl.render(context! {
                name => name,
                table_prefix => DEFAULT_TABLE_PREFIX,
                engine => DEFAULT_ENGINE,
                settings => DEFAULT_SETTINGS,
                catalog => CATALOG_FILE_NAME,
                output => DEFAULT_OUTPUT,
            })
        })
        .map_err(GenError::init)?;
    rendered.push('\n');
    Ok(rendered)
}

fn render_catalog() -> Result<String, GenError> {
    let body = serde_yaml::to_string(&builtin_catalog()).map_err(GenError::init)?;
    Ok(format!("{CATALOG_HEADER}{body}"))
}

/// Scaffold a project file and a copy of the built-in catalog under `path`.
pub fn handle_init(path: &Path, project_name: Option<String>) -> Result<(), GenError> {
    let project_path = path.join(PROJECT_FILE_NAME);
    let catalog_path = path.join(CATALOG_FILE_NAME);
    for existing in [&project_path, &catalog_path] {
        if existing.exists() {
            return Err(GenError::init_msg(format!(
                "refusing to overwrite {}",
                existing.display()
            )));
        }
    }

    let name = project_name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    fs::create_dir_all(path).map_err(GenError::init)?;
    fs::write(&project_path, render_project(&name)?).map_err(GenError::init)?;
    fs::write(&catalog_path, render_catalog()?).map_err(GenError::init)?;

    info!("initialised project `{}` at {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::project::ProjectConfig;

    #[test]
    fn project_template_renders_defaults() {
        let rendered = render_project("demo").unwrap();
        assert!(rendered.starts_with("name: \"demo\"\n"));
        assert!(rendered.contains("engine: Memory()\n"));
        assert!(rendered.contains("  - allow_experimental_bigint_types = 1\n"));
        assert!(rendered.ends_with("output: all_types.sql\n"));
    }

    #[test]
    fn project_name_with_yaml_syntax_stays_a_string() {
        let rendered = render_project("a: b # c").unwrap();
        let parsed: ProjectConfig = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed.name, "a: b # c");
        assert_eq!(parsed.catalog.as_deref(), Some(Path::new(CATALOG_FILE_NAME)));
    }

    #[test]
    fn rendered_catalog_round_trips_through_yaml() {
        let rendered = render_catalog().unwrap();
        let parsed: common::types::TypeCatalog = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed, builtin_catalog());
    }
}
