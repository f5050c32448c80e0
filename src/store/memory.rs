use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ContentMedium;
use crate::error::StoreError;
use crate::models::{PortfolioData, Profile, Project, Section, Skill, StoredContent};

/// Process-local content. Starts empty (and is seeded on first load) unless
/// built with [`MemoryMedium::with_content`].
#[derive(Default)]
pub struct MemoryMedium {
    content: RwLock<StoredContent>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(data: PortfolioData) -> Self {
        Self {
            content: RwLock::new(data.into()),
        }
    }
}

#[async_trait]
impl ContentMedium for MemoryMedium {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn read(&self) -> Result<StoredContent, StoreError> {
        Ok(self.content.read().await.clone())
    }

    async fn write_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.content.write().await.profile = Some(profile.clone());
        Ok(())
    }

    async fn write_sections(&self, sections: &[Section]) -> Result<(), StoreError> {
        self.content.write().await.sections = sections.to_vec();
        Ok(())
    }

    async fn write_skills(&self, skills: &[Skill]) -> Result<(), StoreError> {
        self.content.write().await.skills = skills.to_vec();
        Ok(())
    }

    async fn write_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.content.write().await.projects = projects.to_vec();
        Ok(())
    }
}
