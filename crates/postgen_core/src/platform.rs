//! Target platforms and tones offered by the generator form.

use serde::{Deserialize, Serialize};

/// Social network a post is generated for.
///
/// # Examples
///
/// ```
/// use postgen_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::LinkedIn.to_string(), "linkedin");
/// assert_eq!(Platform::from_str("twitter").unwrap(), Platform::Twitter);
/// assert_eq!(Platform::Instagram.label(), "Instagram");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// LinkedIn
    #[default]
    LinkedIn,
    /// Instagram
    Instagram,
    /// Facebook
    Facebook,
    /// Twitter / X
    Twitter,
}

impl Platform {
    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
        }
    }
}

/// Voice the generated post is written in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    /// Formal language, professional terminology
    Formal,
    /// Professional but approachable
    #[default]
    Professional,
    /// Persuasive, benefit-focused
    Promotional,
    /// Casual and warm
    Friendly,
}

impl Tone {
    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Professional => "Professional",
            Tone::Promotional => "Promotional",
            Tone::Friendly => "Friendly",
        }
    }
}
