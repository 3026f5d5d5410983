//! Ordered catalog of showcased projects.

use super::records::{ClosedDraft, ClosedRecord, ProjectDraft, ProjectRecord};

/// Open and closed projects in display order.
///
/// Appending assigns sequential ids starting at 1, separately for each
/// list. Records never move or disappear, so display order is insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
    closed: Vec<ClosedRecord>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<ProjectRecord>, closed: Vec<ClosedRecord>) -> Self {
        Self { projects, closed }
    }

    /// Open projects in display order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Closed engagements in display order.
    pub fn closed(&self) -> &[ClosedRecord] {
        &self.closed
    }

    /// Counter text shown next to the open projects heading.
    pub fn counter_label(&self) -> String {
        format!("{} projects", self.projects.len())
    }

    /// Appends an open project and returns its assigned id.
    pub fn append_project(&mut self, draft: ProjectDraft) -> usize {
        let id = self.projects.len() + 1;
        self.projects.push(ProjectRecord::from_draft(id, draft));
        id
    }

    /// Appends a closed engagement and returns its assigned id.
    pub fn append_closed(&mut self, draft: ClosedDraft) -> usize {
        let id = self.closed.len() + 1;
        self.closed.push(ClosedRecord::from_draft(id, draft));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::ConfidentialBadge;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            site_url: format!("https://{title}.example.com"),
            image: format!("{title}.png"),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut catalog = ProjectCatalog::default();
        assert_eq!(catalog.append_project(draft("first")), 1);
        assert_eq!(catalog.append_project(draft("second")), 2);
        assert_eq!(catalog.append_project(draft("third")), 3);

        let ids: Vec<usize> = catalog.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_preserves_display_order() {
        let mut catalog = ProjectCatalog::default();
        catalog.append_project(draft("alpha"));
        catalog.append_project(draft("beta"));

        let titles: Vec<&str> = catalog
            .projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_counter_label_tracks_open_projects_only() {
        let mut catalog = ProjectCatalog::default();
        assert_eq!(catalog.counter_label(), "0 projects");

        catalog.append_project(draft("one"));
        catalog.append_closed(ClosedDraft {
            title: "hidden".to_string(),
            badge: ConfidentialBadge::Nda,
            ..Default::default()
        });
        assert_eq!(catalog.counter_label(), "1 projects");
    }

    #[test]
    fn test_closed_ids_are_independent() {
        let mut catalog = ProjectCatalog::default();
        catalog.append_project(draft("open"));
        catalog.append_project(draft("open-two"));
        assert_eq!(
            catalog.append_closed(ClosedDraft {
                title: "first closed".to_string(),
                ..Default::default()
            }),
            1
        );
    }
}
