//! Light/dark theme preference.

use crate::PreferenceStore;
use std::str::FromStr;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// UI colour scheme.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Light background
    Light,
    /// Dark background
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class shown on the theme toggle.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun",
            Theme::Dark => "fas fa-moon",
        }
    }

    /// Single-character icon for terminal hosts.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

/// Read the persisted theme, falling back to dark.
///
/// Unreadable or unrecognised values are logged and ignored.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => Theme::from_str(&value).unwrap_or_else(|_| {
            tracing::warn!(%value, "Unrecognised theme preference, using default");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference");
            Theme::default()
        }
    }
}

/// Flip `current`, persist the result, and return it.
///
/// A failed write is logged; the returned theme still applies for this session.
pub fn toggle_theme(current: Theme, store: &mut dyn PreferenceStore) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_KEY, &next.to_string()) {
        tracing::warn!(error = %e, theme = %next, "Failed to persist theme preference");
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPreferences;

    #[test]
    fn test_default_theme_is_dark() {
        let store = MemoryPreferences::default();
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_theme_and_value() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "light").unwrap();
        let original = load_theme(&store);

        let once = toggle_theme(original, &mut store);
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let twice = toggle_theme(once, &mut store);
        assert_eq!(twice, original);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(load_theme(&store), original);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    }
}
