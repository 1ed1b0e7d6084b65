use serde::{Deserialize, Serialize};

/// How far low-cardinality variants reach into the array nestings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LowCardinalityDepth {
    /// Plain, nullable and single-level array variants.
    #[default]
    Flat,
    /// `Flat` plus the triple-nested array variants.
    Nested,
}
