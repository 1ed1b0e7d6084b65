//! Builds the ClickHouse all-types fixture: one `DROP`/`CREATE` pair per
//! type descriptor, sharing a fixed column template.

pub mod columns;
pub mod error;
pub mod options;
pub mod policy;
pub mod render;

pub use columns::{ColumnSpec, TableSpec};
pub use error::GenerateError;
pub use options::ScriptOptions;
pub use policy::supports_low_cardinality;
pub use render::{generate_script, render_preamble, render_table, write_script};
