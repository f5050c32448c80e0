use serde::{Deserialize, Serialize};

use super::{Profile, Project, Section, Skill, defaults};

/// The whole portfolio as served to visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            profile: defaults::profile(),
            sections: defaults::sections(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// What a storage medium actually holds. `profile` is `None` until the
/// medium has been seeded.
///
/// This is also the on-disk layout of the file medium.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl From<PortfolioData> for StoredContent {
    fn from(data: PortfolioData) -> Self {
        Self {
            profile: Some(data.profile),
            sections: data.sections,
            skills: data.skills,
            projects: data.projects,
        }
    }
}
