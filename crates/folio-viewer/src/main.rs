//! Entry point for the Folio portfolio viewer.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_ui::{Theme, ThemedRoot};
use folio_viewer::components::app::App;
use folio_viewer::state::{clear_prefs, default_data_dir, load_prefs};

/// Viewer-specific CSS embedded at compile time.
const VIEWER_CSS: &str = include_str!("../assets/viewer.css");

/// Global storage for the resolved data directory.
static DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global storage for the theme override argument.
static THEME_OVERRIDE: OnceLock<Option<Theme>> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-viewer")]
#[command(about = "Desktop portfolio viewer")]
struct Args {
    /// Directory for persisted preferences (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Theme for this run, "light" or "dark" (overrides the saved choice, not persisted)
    #[arg(long)]
    theme: Option<String>,

    /// Remove persisted preferences before starting
    #[arg(long)]
    clean: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Folio viewer");

    let args = Args::parse();

    let data_dir = args.data_dir.or_else(default_data_dir);
    if data_dir.is_none() {
        tracing::warn!("no data directory available, preferences will not persist");
    }

    if args.clean {
        if let Some(dir) = data_dir.as_ref() {
            match clear_prefs(dir) {
                Ok(()) => tracing::info!("--clean: removed preferences at {}", dir.display()),
                Err(err) => tracing::error!("--clean: failed to remove preferences: {err}"),
            }
        }
    }

    let theme_override = args.theme.as_deref().and_then(|value| {
        let parsed = Theme::from_css_value(value);
        if parsed.is_none() {
            tracing::warn!("ignoring unknown --theme value {value:?}");
        }
        parsed
    });

    // Store args in global state
    DATA_DIR.set(data_dir).ok();
    THEME_OVERRIDE.set(theme_override).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Folio")
                        .with_inner_size(LogicalSize::new(1280.0, 900.0)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    folio_ui::SHARED_CSS,
                    VIEWER_CSS,
                )),
        )
        .launch(RootApp);
}

/// Root component wiring launch arguments into the app shell.
#[component]
fn RootApp() -> Element {
    let data_dir = DATA_DIR.get().and_then(|d| d.clone());
    let cli_theme = THEME_OVERRIDE.get().and_then(|t| *t);

    let stored_theme = data_dir
        .as_ref()
        .map(|dir| load_prefs(dir))
        .unwrap_or_default()
        .stored_theme();

    rsx! {
        ThemedRoot {
            App {
                data_dir,
                stored_theme,
                cli_theme,
            }
        }
    }
}
