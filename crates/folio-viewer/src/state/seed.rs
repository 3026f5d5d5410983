//! Built-in catalog entries shown on first run.
//!
//! The viewer renders a fixed showcase, so the seed is the whole data
//! set rather than placeholder content.

use super::catalog::ProjectCatalog;
use super::records::{ClosedRecord, ConfidentialBadge, ProjectRecord, ProjectStatus};

/// Builds the catalog rendered at startup.
pub fn seed_catalog() -> ProjectCatalog {
    ProjectCatalog::new(open_projects(), closed_projects())
}

fn open_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: 1,
            title: "Digital Publishing House".to_string(),
            description: "Publishing platform for a methodology association, with an NFT \
                          storefront for digital books"
                .to_string(),
            site_url: "https://publishing.folio-demo.app/".to_string(),
            repo_url: "https://github.com/folio-showcase/publishing-house".to_string(),
            image: "publishing.png".to_string(),
            status: ProjectStatus::Completed,
            date: "2024".to_string(),
            complexity: "Large".to_string(),
            kind: "Web app".to_string(),
            tech: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "React".to_string(),
                "Redux Toolkit".to_string(),
                "React Query".to_string(),
                "Firebase".to_string(),
                "Styled Components".to_string(),
                "Framer Motion".to_string(),
            ],
        },
        ProjectRecord {
            id: 2,
            title: "EPUB Reader".to_string(),
            description: "Reader for books and long-form articles in EPUB format".to_string(),
            site_url: "https://reader.folio-demo.app/".to_string(),
            repo_url: "https://github.com/folio-showcase/epub-reader".to_string(),
            image: "reader.png".to_string(),
            status: ProjectStatus::Completed,
            date: "2023".to_string(),
            complexity: "Medium".to_string(),
            kind: "Web app".to_string(),
            tech: vec![
                "epub.js".to_string(),
                "JSZip".to_string(),
                "sanitize-html".to_string(),
            ],
        },
        ProjectRecord {
            id: 3,
            title: "Token Workshop".to_string(),
            description: "Web app for creating and managing tokens on the Solana network"
                .to_string(),
            site_url: "https://tokens.folio-demo.app/".to_string(),
            repo_url: "https://github.com/folio-showcase/token-workshop".to_string(),
            image: "tokens.png".to_string(),
            status: ProjectStatus::InProgress,
            date: "2025".to_string(),
            complexity: "Medium".to_string(),
            kind: "dApp".to_string(),
            tech: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
                "Solana Web3.js".to_string(),
                "Zustand".to_string(),
            ],
        },
        ProjectRecord {
            id: 4,
            title: "AXIOM Analytics".to_string(),
            description: "Portfolio analytics dashboard for on-chain assets".to_string(),
            site_url: "https://axiom.folio-demo.app/".to_string(),
            repo_url: "https://github.com/folio-showcase/axiom-analytics".to_string(),
            image: "axiom.png".to_string(),
            status: ProjectStatus::Planned,
            date: "2025".to_string(),
            complexity: "Large".to_string(),
            kind: "Dashboard".to_string(),
            tech: vec![
                "React".to_string(),
                "React Router".to_string(),
                "Wagmi".to_string(),
                "Viem".to_string(),
                "Recharts".to_string(),
                "MobX".to_string(),
            ],
        },
    ]
}

fn closed_projects() -> Vec<ClosedRecord> {
    vec![
        ClosedRecord {
            id: 1,
            title: "Facade Design Studio".to_string(),
            description: "Specialized graphics editor for designing building facades and \
                          interior finishes. Covers exterior visualization, room planning, \
                          partition placement, and material selection, integrated into a \
                          closed ecosystem that automates a construction company's full \
                          cycle from project to estimate."
                .to_string(),
            badge: ConfidentialBadge::Nda,
            screenshots: vec!["/images/facades1.png".to_string()],
            tech: Vec::new(),
        },
        ClosedRecord {
            id: 2,
            title: "Operations Panel".to_string(),
            description: "Internal system for managing tasks, documents, projects, and \
                          finances, part of the same closed ecosystem as the facade editor."
                .to_string(),
            badge: ConfidentialBadge::Private,
            screenshots: vec![
                "/images/admin1.png".to_string(),
                "/images/admin2.png".to_string(),
                "/images/admin3.png".to_string(),
                "/images/admin4.png".to_string(),
            ],
            tech: Vec::new(),
        },
        ClosedRecord {
            id: 3,
            title: "Peer Exchange Desk".to_string(),
            description: "Interface for a user-to-user currency exchange with manual \
                          transfer confirmation."
                .to_string(),
            badge: ConfidentialBadge::Nda,
            screenshots: vec![
                "/images/exchanger1.png".to_string(),
                "/images/exchanger2.png".to_string(),
                "/images/exchanger3.png".to_string(),
            ],
            tech: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let catalog = seed_catalog();
        for (index, project) in catalog.projects().iter().enumerate() {
            assert_eq!(project.id, index + 1);
        }
        for (index, record) in catalog.closed().iter().enumerate() {
            assert_eq!(record.id, index + 1);
        }
    }

    #[test]
    fn test_seed_covers_every_status() {
        let catalog = seed_catalog();
        for status in ProjectStatus::all() {
            assert!(
                catalog.projects().iter().any(|p| p.status == *status),
                "no seed project with status {status:?}"
            );
        }
    }

    #[test]
    fn test_seed_closed_records_have_screenshots() {
        let catalog = seed_catalog();
        assert!(!catalog.closed().is_empty());
        for record in catalog.closed() {
            assert!(!record.screenshots.is_empty());
        }
    }
}
