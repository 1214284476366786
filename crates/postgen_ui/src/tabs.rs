//! The two mutually exclusive panels.

use serde::{Deserialize, Serialize};

/// Visible panel. Exactly one is active at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    /// Post generation form and preview
    #[default]
    Generate,
    /// Generated post list
    Posts,
}

impl Tab {
    /// Tab button label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Generate => "Generate Posts",
            Tab::Posts => "View Posts",
        }
    }
}
