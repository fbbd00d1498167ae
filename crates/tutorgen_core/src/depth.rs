//! Explanation depth.

use serde::{Deserialize, Serialize};

/// How deep the generated explanation should go.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Depth {
    /// A short overview
    Brief,
    /// A fuller walk-through
    #[default]
    Detailed,
    /// Everything, with applications and caveats
    Comprehensive,
}
