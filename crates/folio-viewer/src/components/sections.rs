//! Page sections composed by the app shell.

use chrono::Datelike;
use dioxus::prelude::*;

use folio_ui::{RevealSection, ScrollOptions, SectionHandle, Theme, ThemeToggle};

use crate::state::{ClosedRecord, ProjectRecord, StatusFilter};

use super::closed_card::ClosedProjectCard;
use super::project_card::OpenProjectCard;

/// Page header with the title block, section navigation, and the theme
/// toggle.
#[component]
pub fn PageHeader(on_theme_change: EventHandler<Theme>) -> Element {
    rsx! {
        header { class: "page-header",
            div { class: "page-header-inner",
                div { class: "page-header-titles",
                    h1 { class: "page-title", "Folio" }
                    p { class: "page-subtitle", "Selected web projects, open and under NDA" }
                }
                nav { class: "page-nav",
                    button {
                        class: "page-nav-link",
                        onclick: move |_| {
                            SectionHandle::new("projects")
                                .scroll_into_view(ScrollOptions::default());
                        },
                        "Projects"
                    }
                    button {
                        class: "page-nav-link",
                        onclick: move |_| {
                            SectionHandle::new("closed-projects")
                                .scroll_into_view(ScrollOptions::default());
                        },
                        "Confidential"
                    }
                }
                ThemeToggle { on_change: on_theme_change }
            }
        }
    }
}

/// Open projects grid with the counter and status filter chips.
///
/// Filtering hides cards instead of unmounting them, so the one-shot
/// section reveal never replays when the filter changes.
#[component]
pub fn OpenProjectsSection(
    projects: Vec<ProjectRecord>,
    counter: String,
    active_filter: StatusFilter,
    on_filter: EventHandler<StatusFilter>,
) -> Element {
    rsx! {
        RevealSection { section_id: "projects",
            div { class: "section-heading",
                h2 { "Projects" }
                span { class: "projects-counter", "{counter}" }
            }

            div { class: "filter-chips",
                for chip in StatusFilter::all().iter() {
                    {
                        let chip_class = if *chip == active_filter {
                            "filter-chip active"
                        } else {
                            "filter-chip"
                        };
                        let chip = *chip;
                        rsx! {
                            button {
                                class: "{chip_class}",
                                onclick: move |_| on_filter.call(chip),
                                "{chip.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "projects-grid",
                for project in projects.iter() {
                    OpenProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        hidden: !active_filter.matches(project.status),
                    }
                }
            }
        }
    }
}

/// Closed engagements with their screenshot galleries.
#[component]
pub fn ClosedProjectsSection(
    records: Vec<ClosedRecord>,
    lightbox: Signal<Option<String>>,
) -> Element {
    rsx! {
        RevealSection { section_id: "closed-projects",
            div { class: "section-heading",
                h2 { "Confidential work" }
            }

            div { class: "closed-projects-grid",
                for record in records.iter() {
                    ClosedProjectCard {
                        key: "{record.id}",
                        record: record.clone(),
                        lightbox,
                    }
                }
            }
        }
    }
}

/// Footer with the current year.
#[component]
pub fn PageFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "page-footer",
            span { "\u{a9} {year} Folio" }
        }
    }
}
