use leptos::logging::warn;

use crate::storage::PreferenceStore;

/// Storage key holding the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Class toggled on `<html>` and `<body>` when the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only `"dark"` selects the dark theme;
    /// a missing or unrecognised value falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

/// Best-effort write of the preference. Failures are logged and otherwise
/// ignored; the theme stays in memory for the rest of the session.
pub fn persist_theme(store: &dyn PreferenceStore, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        warn!("Failed to persist theme preference: {}", e);
    }
}

/// Add or remove the `dark` class on `<html>` and `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let dark = theme.is_dark();
    if let Some(html) = doc.document_element() {
        let _ = html.class_list().toggle_with_force(DARK_CLASS, dark);
    }
    if let Some(body) = doc.body() {
        let _ = body.class_list().toggle_with_force(DARK_CLASS, dark);
    }
}
