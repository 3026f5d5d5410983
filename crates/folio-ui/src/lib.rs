//! Shared UI components for Folio applications.
//!
//! Provides themes, the image lightbox, and the section reveal wrapper
//! shared by the viewer frontends.

pub mod lightbox;
pub mod reveal;
pub mod theme;

pub use lightbox::{LightboxOverlay, close_lightbox, open_lightbox};
pub use reveal::{RevealSection, ScrollOptions, SectionHandle};
pub use theme::{
    CURRENT_THEME, Theme, ThemeToggle, ThemedRoot, resolve_initial_theme, resolve_os_update,
    set_theme, toggle_theme,
};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
