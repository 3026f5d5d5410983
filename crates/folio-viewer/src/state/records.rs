//! Project records shown by the viewer.
//!
//! Open projects carry a public deployment link. Closed engagements are
//! confidential, so they show a screenshot gallery instead of a link.

/// Lifecycle status of an open project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    /// Returns the data-status attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
        }
    }

    /// Returns the badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Planned => "Planned",
        }
    }

    /// Returns all statuses in display order.
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Completed,
            ProjectStatus::InProgress,
            ProjectStatus::Planned,
        ]
    }
}

/// Card filter selected in the projects toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    InProgress,
    Planned,
}

impl StatusFilter {
    /// All filter chips in display order, `All` first.
    pub fn all() -> &'static [StatusFilter] {
        &[
            StatusFilter::All,
            StatusFilter::Completed,
            StatusFilter::InProgress,
            StatusFilter::Planned,
        ]
    }

    /// Label for the filter chip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::InProgress => "In progress",
            Self::Planned => "Planned",
        }
    }

    /// Whether a card with `status` stays visible under this filter.
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status == ProjectStatus::Completed,
            Self::InProgress => status == ProjectStatus::InProgress,
            Self::Planned => status == ProjectStatus::Planned,
        }
    }
}

/// Confidentiality marker on a closed engagement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfidentialBadge {
    #[default]
    Nda,
    Private,
}

impl ConfidentialBadge {
    /// Returns the badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidentialBadge::Nda => "NDA",
            ConfidentialBadge::Private => "Private",
        }
    }
}

/// An open project with a public deployment.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub id: usize,
    pub title: String,
    pub description: String,
    /// Live deployment opened when the card is activated.
    pub site_url: String,
    pub repo_url: String,
    /// Image reference, resolved through [`resolve_image_url`].
    pub image: String,
    pub status: ProjectStatus,
    /// Delivery date shown in the meta row.
    pub date: String,
    pub complexity: String,
    /// Project category shown in the meta row.
    pub kind: String,
    pub tech: Vec<String>,
}

impl ProjectRecord {
    pub(crate) fn from_draft(id: usize, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            site_url: draft.site_url,
            repo_url: draft.repo_url,
            image: draft.image,
            status: draft.status,
            date: draft.date,
            complexity: draft.complexity,
            kind: draft.kind,
            tech: draft.tech,
        }
    }

    /// Resolved image URL for the card.
    pub fn image_url(&self) -> String {
        resolve_image_url(&self.image)
    }
}

/// Everything needed to append an open project; the catalog assigns the id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub site_url: String,
    pub repo_url: String,
    pub image: String,
    pub status: ProjectStatus,
    pub date: String,
    pub complexity: String,
    pub kind: String,
    pub tech: Vec<String>,
}

/// A confidential engagement shown without a live link.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedRecord {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub badge: ConfidentialBadge,
    /// Gallery images, stored as already-resolved paths.
    pub screenshots: Vec<String>,
    pub tech: Vec<String>,
}

impl ClosedRecord {
    pub(crate) fn from_draft(id: usize, draft: ClosedDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            badge: draft.badge,
            screenshots: draft.screenshots,
            tech: draft.tech,
        }
    }
}

/// Everything needed to append a closed engagement; the catalog assigns the id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosedDraft {
    pub title: String,
    pub description: String,
    pub badge: ConfidentialBadge,
    pub screenshots: Vec<String>,
    pub tech: Vec<String>,
}

/// Resolves a card image reference to a displayable URL.
///
/// Absolute http(s) URLs and rooted paths pass through unchanged; bare
/// filenames resolve into the bundled images directory.
pub fn resolve_image_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/images/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_image_url() {
        assert_eq!(
            resolve_image_url("https://cdn.example.com/shot.png"),
            "https://cdn.example.com/shot.png"
        );
        assert_eq!(
            resolve_image_url("http://cdn.example.com/shot.png"),
            "http://cdn.example.com/shot.png"
        );
        assert_eq!(resolve_image_url("/images/admin1.png"), "/images/admin1.png");
        assert_eq!(resolve_image_url("mmass.png"), "/images/mmass.png");
    }

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(ProjectStatus::Planned));
        assert!(StatusFilter::Completed.matches(ProjectStatus::Completed));
        assert!(!StatusFilter::Completed.matches(ProjectStatus::Planned));
        assert!(StatusFilter::InProgress.matches(ProjectStatus::InProgress));
        assert!(StatusFilter::Planned.matches(ProjectStatus::Planned));
    }

    #[test]
    fn test_filter_chips_start_with_all() {
        let chips = StatusFilter::all();
        assert_eq!(chips[0], StatusFilter::All);
        assert_eq!(chips.len(), 1 + ProjectStatus::all().len());
    }

    #[test]
    fn test_status_css_values_are_distinct() {
        let values: std::collections::HashSet<_> =
            ProjectStatus::all().iter().map(|s| s.css_value()).collect();
        assert_eq!(values.len(), ProjectStatus::all().len());
    }
}
