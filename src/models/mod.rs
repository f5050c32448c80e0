pub mod defaults;
pub mod document;
pub mod page;
pub mod profile;
pub mod projects;
pub mod sections;
pub mod skills;

use serde::Deserialize;

pub use document::{PortfolioData, StoredContent};
pub use profile::Profile;
pub use projects::{NewProject, Project, ProjectImage};
pub use sections::Section;
pub use skills::{NewSkill, Skill};

/// Query string for `DELETE /api/skills?id=` and `DELETE /api/projects?id=`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The requested id, treating an empty value as missing.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
