//! Shared image lightbox overlay.

use dioxus::prelude::*;

/// Locks or restores page scrolling behind the overlay.
fn set_scroll_locked(locked: bool) {
    let value = if locked { "hidden" } else { "" };
    document::eval(&format!("document.body.style.overflow = '{value}';"));
}

/// Shows `src` in the lightbox. Opening while already open swaps the
/// image in place.
pub fn open_lightbox(mut lightbox: Signal<Option<String>>, src: impl Into<String>) {
    lightbox.set(Some(src.into()));
    set_scroll_locked(true);
}

/// Closes the lightbox and restores page scrolling. Closing an already
/// closed lightbox is a no-op.
pub fn close_lightbox(mut lightbox: Signal<Option<String>>) {
    if lightbox.read().is_none() {
        return;
    }
    lightbox.set(None);
    set_scroll_locked(false);
}

/// Fullscreen overlay showing a single enlarged image.
///
/// Closes on backdrop click or the close button. Clicks on the image
/// itself stay inside the overlay. Escape handling lives on the app
/// root, which checks the signal before closing.
#[component]
pub fn LightboxOverlay(lightbox: Signal<Option<String>>) -> Element {
    let Some(src) = lightbox() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "lightbox-overlay show",
            onclick: move |_| close_lightbox(lightbox),
            button {
                class: "lightbox-close",
                onclick: move |_| close_lightbox(lightbox),
                "\u{00d7}"
            }
            img {
                class: "lightbox-image",
                src: "{src}",
                alt: "Enlarged screenshot",
                onclick: move |e| e.stop_propagation(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signals need a live scope, so each test drives a throwaway
    // component through one rebuild. Without a document provider the
    // scroll-lock eval degrades to a no-op.
    fn run_once(app: fn() -> Element) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }

    #[test]
    fn test_reopening_swaps_the_displayed_image() {
        fn app() -> Element {
            let lightbox = use_signal(|| None::<String>);
            open_lightbox(lightbox, "a.png");
            open_lightbox(lightbox, "b.png");
            assert_eq!(lightbox(), Some("b.png".to_string()));
            rsx! {}
        }
        run_once(app);
    }

    #[test]
    fn test_close_without_open_is_a_no_op() {
        fn app() -> Element {
            let lightbox = use_signal(|| None::<String>);
            close_lightbox(lightbox);
            assert_eq!(lightbox(), None);

            open_lightbox(lightbox, "shot.png");
            close_lightbox(lightbox);
            close_lightbox(lightbox);
            assert_eq!(lightbox(), None);
            rsx! {}
        }
        run_once(app);
    }
}
