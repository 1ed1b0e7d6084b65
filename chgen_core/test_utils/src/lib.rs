use std::fs;
use std::path::{Path, PathBuf};

pub use common::config::loader::{CATALOG_FILE_NAME, PROJECT_FILE_NAME};

/// Writes a project file, and optionally a `types.yml` catalog, into `root`.
pub fn write_project(root: &Path, project_yaml: &str, catalog_yaml: Option<&str>) -> PathBuf {
    fs::create_dir_all(root).expect("create project dir");
    let project_path = root.join(PROJECT_FILE_NAME);
    fs::write(&project_path, project_yaml).expect("write project file");
    if let Some(catalog) = catalog_yaml {
        fs::write(root.join(CATALOG_FILE_NAME), catalog).expect("write catalog file");
    }
    project_path
}

/// Pulls the `CREATE TABLE <name> (...) ENGINE = ...;` block for one table
/// out of a generated script.
pub fn create_statement<'a>(script: &'a str, table: &str) -> Option<&'a str> {
    let header = format!("CREATE TABLE {table} (");
    let start = script.find(&header)?;
    let rest = &script[start..];
    let end = rest.find(";\n").map(|i| i + 1).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Column names of a `CREATE TABLE` block, in order.
pub fn column_names(create: &str) -> Vec<String> {
    create
        .lines()
        .skip(1)
        .take_while(|line| !line.starts_with(')'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Fresh scratch directory removed on drop.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create scratch dir")
}
