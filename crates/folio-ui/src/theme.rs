//! Theme system for Folio applications.
//!
//! Provides 2 themes: Light and Dark, plus the toggle control and the
//! preference-resolution helper used at startup.

use dioxus::prelude::*;

/// Available themes for the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Returns the toggle glyph for the theme.
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}",
            Theme::Dark => "\u{263e}",
        }
    }

    /// Returns the other theme.
    pub fn other(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a stored data-theme value. Unknown values yield `None`.
    pub fn from_css_value(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

/// Resolves the theme to apply at startup.
///
/// An explicit preference always wins. Without one the OS color scheme
/// decides, and a missing OS answer falls back to light.
pub fn resolve_initial_theme(explicit: Option<Theme>, os_prefers_dark: Option<bool>) -> Theme {
    match explicit {
        Some(theme) => theme,
        None if os_prefers_dark == Some(true) => Theme::Dark,
        None => Theme::Light,
    }
}

/// Resolves a live OS color-scheme change.
///
/// Returns the theme to apply, or `None` while an explicit preference
/// exists. An explicit choice keeps overriding OS changes until the
/// stored preference is cleared.
pub fn resolve_os_update(has_explicit: bool, prefers_dark: bool) -> Option<Theme> {
    if has_explicit {
        return None;
    }
    Some(resolve_initial_theme(None, Some(prefers_dark)))
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Sets the active theme.
pub fn set_theme(theme: Theme) {
    *CURRENT_THEME.write() = theme;
}

/// Switches to the other theme and returns the new value.
pub fn toggle_theme() -> Theme {
    let next = CURRENT_THEME.read().other();
    set_theme(next);
    next
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme toggle button.
///
/// The icon and label always describe the theme a click would switch to,
/// not the active one. Explicit choices are reported through `on_change`
/// so the host can persist them.
#[component]
pub fn ThemeToggle(on_change: EventHandler<Theme>) -> Element {
    let mut pulsing = use_signal(|| false);
    let target = CURRENT_THEME.read().other();

    rsx! {
        button {
            class: if pulsing() { "theme-toggle pulsing" } else { "theme-toggle" },
            title: "Toggle theme",
            onclick: move |_| {
                let next = toggle_theme();
                on_change.call(next);
                pulsing.set(true);
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(150)).await;
                    pulsing.set(false);
                });
            },
            span { class: "theme-toggle-icon", "{target.glyph()}" }
            span { class: "theme-toggle-label", "{target.display_name()} theme" }
        }
    }
}
