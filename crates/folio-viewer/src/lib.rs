//! Folio portfolio viewer.
//!
//! A Dioxus desktop application rendering a fixed project showcase:
//! - Open projects with live deployment links and status filtering
//! - Confidential engagements with screenshot galleries
//! - Light/dark theming persisted between runs

pub mod components;
pub mod state;
