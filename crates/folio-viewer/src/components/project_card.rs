//! Card for an open project with a public deployment.

use dioxus::prelude::*;
use dioxus::prelude::Key;

use crate::state::ProjectRecord;

/// Builds the script that opens `url` outside the viewer window. The
/// URL is embedded as a JSON string literal so quotes and backslashes
/// in it cannot break out of the script.
fn window_open_script(url: &str) -> Option<String> {
    let target = serde_json::to_string(url).ok()?;
    Some(format!("window.open({target}, '_blank', 'noopener,noreferrer');"))
}

/// Opens a URL in a new browser context, outside the viewer window.
pub(crate) fn open_external(url: &str) {
    if let Some(script) = window_open_script(url) {
        document::eval(&script);
    }
}

/// Clickable project card.
///
/// Activating the card (click, Enter, or Space) opens the live site.
/// The explicit links open their own targets without also triggering
/// the card. Filtered-out cards stay mounted but drop out of layout,
/// and the entrance animation replays when they come back.
#[component]
pub fn OpenProjectCard(project: ProjectRecord, hidden: bool) -> Element {
    let mut image_failed = use_signal(|| false);

    let image_url = project.image_url();
    let status = project.status;
    let card_style = if hidden {
        "display: none;"
    } else {
        "display: flex; animation: cardEntrance 0.6s ease-out both;"
    };

    let click_url = project.site_url.clone();
    let key_url = project.site_url.clone();
    let site_url = project.site_url.clone();
    let repo_url = project.repo_url.clone();

    rsx! {
        div {
            class: "project-card",
            style: "{card_style}",
            "data-project-id": "{project.id}",
            "data-status": "{status.css_value()}",
            tabindex: "0",
            role: "button",
            aria_label: "Open {project.title}",
            onclick: move |_| open_external(&click_url),
            onkeydown: move |evt| {
                let key = evt.key();
                match key {
                    Key::Enter => {
                        evt.prevent_default();
                        open_external(&key_url);
                    }
                    Key::Character(ref c) if c == " " => {
                        evt.prevent_default();
                        open_external(&key_url);
                    }
                    _ => {}
                }
            },

            div { class: "project-badge {status.css_value()}", "{status.label()}" }

            div { class: "project-image",
                if image_failed() {
                    div { class: "image-placeholder", "{project.title}" }
                } else {
                    img {
                        src: "{image_url}",
                        alt: "Screenshot of {project.title}",
                        loading: "lazy",
                        onerror: move |_| image_failed.set(true),
                    }
                }
            }

            div { class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-desc", "{project.description}" }

                div { class: "project-meta",
                    span { "{project.date}" }
                    span { " \u{b7} {project.complexity}" }
                    span { " \u{b7} {project.kind}" }
                }

                div { class: "tech-tags",
                    for tech in project.tech.iter() {
                        span { class: "tech-tag", "{tech}" }
                    }
                }

                div { class: "project-links",
                    a {
                        class: "project-link",
                        href: "{project.site_url}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            open_external(&site_url);
                        },
                        "Visit site"
                    }
                    a {
                        class: "repo-link",
                        href: "{project.repo_url}",
                        aria_label: "Source repository",
                        onclick: move |evt| {
                            evt.prevent_default();
                            evt.stop_propagation();
                            open_external(&repo_url);
                        },
                        "Source"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_open_script_quotes_the_url() {
        assert_eq!(
            window_open_script("https://folio-demo.app/").as_deref(),
            Some(r#"window.open("https://folio-demo.app/", '_blank', 'noopener,noreferrer');"#)
        );
    }

    #[test]
    fn test_window_open_script_survives_quotes_in_the_url() {
        let script = window_open_script(r#"https://example.com/o'brien?q="x""#).unwrap();
        assert!(script.contains(r#""https://example.com/o'brien?q=\"x\"""#));
    }
}
