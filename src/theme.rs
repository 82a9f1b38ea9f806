/// Light/dark theme persistence and application
///
/// The chosen theme is mirrored onto the `data-theme` attribute of the
/// `<html>` element (the stylesheet keys off it) and persisted in
/// localStorage. Initialization precedence: persisted value, then the
/// OS-level color-scheme preference, then light.

/// localStorage key the theme scalar lives under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flip(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_saved(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Pick the startup theme: a recognized persisted value wins, otherwise
/// the OS preference, otherwise light.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved.and_then(Theme::from_saved) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Read localStorage and the `prefers-color-scheme` media query and feed
/// them through [`resolve_initial`]. Falls back to light off the browser.
pub fn detect_initial() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::Light;
    };

    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());

    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());

    resolve_initial(saved.as_deref(), prefers_dark)
}

/// Set `data-theme` on the document element and persist the choice.
/// Both writes are best-effort.
pub fn apply(theme: Theme) {
    let window = web_sys::window();

    if let Some(element) = window
        .as_ref()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = element.set_attribute("data-theme", theme.as_str());
    }

    if let Some(storage) = window.and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_value_wins_over_os_preference() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_os_preference_used_when_nothing_persisted() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn test_unrecognized_persisted_value_falls_through() {
        assert_eq!(resolve_initial(Some("solarized"), true), Theme::Dark);
        assert_eq!(resolve_initial(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_flip() {
        assert_eq!(Theme::Light.flip(), Theme::Dark);
        assert_eq!(Theme::Dark.flip(), Theme::Light);
    }
}
