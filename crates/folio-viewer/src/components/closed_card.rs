//! Card for a confidential engagement.
//!
//! No live link. The screenshot gallery is the only way in, and every
//! image opens in the shared lightbox.

use dioxus::prelude::*;

use folio_ui::open_lightbox;

use crate::state::ClosedRecord;

#[component]
pub fn ClosedProjectCard(record: ClosedRecord, lightbox: Signal<Option<String>>) -> Element {
    rsx! {
        div {
            class: "closed-project-card",
            "data-project-id": "{record.id}",

            div { class: "closed-project-header",
                h3 { class: "closed-project-title", "{record.title}" }
                span { class: "confidential-badge", "\u{1f512} {record.badge.label()}" }
            }

            p { class: "closed-project-desc", "{record.description}" }

            if !record.tech.is_empty() {
                div { class: "closed-tech-tags",
                    for tech in record.tech.iter() {
                        span { class: "closed-tech-tag", "{tech}" }
                    }
                }
            }

            div { class: "photo-gallery",
                for shot in record.screenshots.iter() {
                    GalleryImage {
                        key: "{shot}",
                        src: shot.clone(),
                        alt: "Screenshot of {record.title}",
                        lightbox,
                    }
                }
            }

            div { class: "closed-project-footer", "Details under NDA" }
        }
    }
}

/// One gallery thumbnail. A broken image gives way to a lock placeholder
/// instead of a broken-image glyph.
#[component]
fn GalleryImage(src: String, alt: String, lightbox: Signal<Option<String>>) -> Element {
    let mut failed = use_signal(|| false);
    let full_src = src.clone();

    if failed() {
        return rsx! {
            div { class: "image-placeholder", "\u{1f512}" }
        };
    }

    rsx! {
        img {
            class: "gallery-image",
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            "data-fullsrc": "{src}",
            onclick: move |evt| {
                evt.stop_propagation();
                open_lightbox(lightbox, full_src.clone());
            },
            onerror: move |_| failed.set(true),
        }
    }
}
