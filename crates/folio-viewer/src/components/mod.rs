//! UI components for the portfolio viewer.

pub mod app;
pub mod closed_card;
pub mod project_card;
pub mod sections;
