//! Light/dark theme controller.
//!
//! An explicit stored preference always wins. Without one the OS
//! `prefers-color-scheme` decides, and OS-level changes keep applying
//! until the user toggles for the first time.

use web_sys::MediaQueryList;

use crate::prefs;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two supported color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Default light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Value stored in the preference and written to `data-theme`.
    pub fn slug(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference value.
    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Media query list for the OS dark-scheme preference, when the host
/// exposes one.
pub fn media_query() -> Option<MediaQueryList> {
    web_sys::window().and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

/// Explicit user preference, if one was ever stored.
pub fn stored() -> Option<Theme> {
    prefs::get(prefs::THEME).and_then(|raw| Theme::from_slug(&raw))
}

fn os_theme() -> Theme {
    if media_query().map_or(false, |query| query.matches()) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Active theme: the stored preference, else the OS default.
pub fn current() -> Theme {
    stored().unwrap_or_else(os_theme)
}

/// Write `data-theme` onto the document element so the stylesheet's
/// variables switch palette.
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.slug());
    }
}

/// Flip the active theme, persist it as an explicit preference and apply
/// it. Returns the new theme.
pub fn toggle() -> Theme {
    let next = current().flipped();
    prefs::set(prefs::THEME, next.slug());
    apply(next);
    next
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn slugs_round_trip() {
        assert_eq!(Theme::from_slug(Theme::Dark.slug()), Some(Theme::Dark));
        assert_eq!(Theme::from_slug(Theme::Light.slug()), Some(Theme::Light));
        assert_eq!(Theme::from_slug("solarized"), None);
    }

    #[test]
    fn flipping_alternates_between_the_two_states() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }
}
