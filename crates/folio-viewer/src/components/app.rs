//! Root application component.

use std::path::PathBuf;

use dioxus::prelude::*;
use dioxus::prelude::Key;

use folio_ui::{
    LightboxOverlay, Theme, close_lightbox, resolve_initial_theme, resolve_os_update, set_theme,
};

use crate::state::{StatusFilter, ViewerPrefs, save_prefs, seed_catalog};

use super::sections::{ClosedProjectsSection, OpenProjectsSection, PageFooter, PageHeader};

/// App shell: header, both project sections, footer, and the shared
/// lightbox overlay.
///
/// `cli_theme` wins over `stored_theme`; with neither set the OS color
/// scheme drives the theme until the user makes an explicit choice.
#[component]
pub fn App(
    data_dir: Option<PathBuf>,
    stored_theme: Option<Theme>,
    cli_theme: Option<Theme>,
) -> Element {
    let catalog = use_signal(seed_catalog);
    let mut active_filter = use_signal(StatusFilter::default);
    let lightbox = use_signal(|| None::<String>);

    let explicit_theme = cli_theme.or(stored_theme);
    let mut has_explicit_theme = use_signal(|| explicit_theme.is_some());

    // Apply the explicit choice (or the light fallback) before first
    // paint. The OS answer arrives asynchronously below.
    use_hook(move || {
        set_theme(resolve_initial_theme(explicit_theme, None));
        let catalog = catalog.read();
        tracing::debug!(
            "catalog loaded: {} open, {} closed",
            catalog.projects().len(),
            catalog.closed().len()
        );
    });

    // Long-lived media-query probe. The script reports the current OS
    // answer once, then every change event.
    let mut os_prefers_dark = use_signal(|| None::<bool>);
    let _os_watch = use_resource(move || async move {
        let mut probe = document::eval(
            r#"
            if (window.matchMedia) {
                var query = window.matchMedia('(prefers-color-scheme: dark)');
                dioxus.send(query.matches);
                query.addEventListener('change', function(e) { dioxus.send(e.matches); });
            }
            "#,
        );
        while let Ok(prefers_dark) = probe.recv::<bool>().await {
            os_prefers_dark.set(Some(prefers_dark));
        }
    });

    // Follow the OS color scheme while no explicit choice exists.
    use_effect(move || {
        let has_explicit = has_explicit_theme();
        if let Some(prefers_dark) = os_prefers_dark() {
            if let Some(theme) = resolve_os_update(has_explicit, prefers_dark) {
                set_theme(theme);
            }
        }
    });

    let prefs_dir = data_dir.clone();
    let on_theme_change = move |theme: Theme| {
        has_explicit_theme.set(true);
        if let Some(dir) = prefs_dir.as_ref() {
            if let Err(err) = save_prefs(dir, &ViewerPrefs::with_theme(theme)) {
                tracing::warn!("failed to persist theme choice: {err}");
            }
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            close_lightbox(lightbox);
        }
    };

    let projects = catalog.read().projects().to_vec();
    let closed = catalog.read().closed().to_vec();
    let counter = catalog.read().counter_label();

    rsx! {
        div {
            class: "app-shell",
            tabindex: "0",
            onkeydown: on_keydown,

            PageHeader { on_theme_change }

            main { class: "page-main",
                OpenProjectsSection {
                    projects,
                    counter,
                    active_filter: active_filter(),
                    on_filter: move |filter| active_filter.set(filter),
                }

                ClosedProjectsSection {
                    records: closed,
                    lightbox,
                }
            }

            PageFooter {}

            LightboxOverlay { lightbox }
        }
    }
}
