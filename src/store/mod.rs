pub mod database;
pub mod file;
pub mod ids;
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::StorageConfig;
use crate::db::ConnectionProvider;
use crate::error::StoreError;
use crate::models::{
    NewProject, NewSkill, PortfolioData, Profile, Project, Section, Skill, StoredContent, defaults,
};

pub use database::DatabaseMedium;
pub use file::FileMedium;
pub use memory::MemoryMedium;

/// A place where portfolio content is persisted.
///
/// Every write replaces one collection (or the profile) wholesale and must
/// be all-or-nothing.
#[async_trait]
pub trait ContentMedium: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn read(&self) -> Result<StoredContent, StoreError>;

    async fn write_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn write_sections(&self, sections: &[Section]) -> Result<(), StoreError>;

    async fn write_skills(&self, skills: &[Skill]) -> Result<(), StoreError>;

    async fn write_projects(&self, projects: &[Project]) -> Result<(), StoreError>;

    /// Writes the initial profile and section list of a fresh medium.
    async fn write_seed(&self, profile: &Profile, sections: &[Section]) -> Result<(), StoreError> {
        self.write_profile(profile).await?;
        self.write_sections(sections).await
    }
}

/// Reads, seeds and replaces portfolio content on a [`ContentMedium`].
///
/// The store trusts its caller: access control happens in the HTTP layer.
#[derive(Clone)]
pub struct PortfolioStore {
    medium: Arc<dyn ContentMedium>,
    // Serializes every mutation in this process. A fresh medium is seeded
    // before the first write lands on it.
    edit_lock: Arc<Mutex<()>>,
}

impl PortfolioStore {
    pub fn new(medium: impl ContentMedium + 'static) -> Self {
        Self::from_arc(Arc::new(medium))
    }

    pub fn from_arc(medium: Arc<dyn ContentMedium>) -> Self {
        Self {
            medium,
            edit_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn medium_name(&self) -> &'static str {
        self.medium.name()
    }

    /// Returns the current document, seeding a fresh medium first.
    ///
    /// Never fails: if the medium cannot be read, the failure is logged and
    /// the default document is returned instead.
    pub async fn load(&self) -> PortfolioData {
        match self.load_seeded().await {
            Ok(data) => data,
            Err(e) => {
                error!(
                    medium = self.medium.name(),
                    error = %e,
                    "Failed to load portfolio content, serving defaults"
                );
                PortfolioData::default()
            }
        }
    }

    /// Like [`load`](Self::load), but surfaces failures. Mutations use this
    /// both to seed before writing and to reload afterwards.
    async fn load_seeded(&self) -> Result<PortfolioData, StoreError> {
        let stored = self.medium.read().await?;

        let Some(profile) = stored.profile else {
            info!(medium = self.medium.name(), "Seeding portfolio content");
            let profile = defaults::profile();
            let sections = defaults::sections();
            self.medium.write_seed(&profile, &sections).await?;
            return Ok(PortfolioData {
                profile,
                sections,
                skills: stored.skills,
                projects: stored.projects,
            });
        };

        let sections = if stored.sections.is_empty() {
            info!(medium = self.medium.name(), "Section list is empty, re-seeding");
            let sections = defaults::sections();
            self.medium.write_sections(&sections).await?;
            sections
        } else {
            stored.sections
        };

        Ok(PortfolioData {
            profile,
            sections,
            skills: stored.skills,
            projects: stored.projects,
        })
    }

    pub async fn replace_profile(&self, profile: Profile) -> Result<PortfolioData, StoreError> {
        profile.validate()?;
        let _guard = self.edit_lock.lock().await;

        self.load_seeded().await?;
        self.medium.write_profile(&profile).await?;
        self.load_seeded().await
    }

    pub async fn replace_sections(
        &self,
        sections: Vec<Section>,
    ) -> Result<PortfolioData, StoreError> {
        let _guard = self.edit_lock.lock().await;

        self.load_seeded().await?;
        self.medium.write_sections(&sections).await?;
        self.load_seeded().await
    }

    pub async fn replace_skills(&self, skills: Vec<Skill>) -> Result<PortfolioData, StoreError> {
        let _guard = self.edit_lock.lock().await;

        self.load_seeded().await?;
        self.medium.write_skills(&skills).await?;
        self.load_seeded().await
    }

    /// Appends a skill with a synthesized id and returns it.
    pub async fn append_skill(&self, input: NewSkill) -> Result<Skill, StoreError> {
        input.validate()?;
        let _guard = self.edit_lock.lock().await;

        let mut skills = self.load_seeded().await?.skills;
        let id = ids::disambiguate(ids::timestamp_id(), skills.iter().map(|s| s.id.as_str()));
        let skill = input.into_skill(id);
        skills.push(skill.clone());

        self.medium.write_skills(&skills).await?;
        Ok(skill)
    }

    /// Removes every skill with `id`. Removing an unknown id succeeds.
    pub async fn remove_skill_by_id(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.edit_lock.lock().await;

        let mut skills = self.load_seeded().await?.skills;
        skills.retain(|s| s.id != id);
        self.medium.write_skills(&skills).await
    }

    pub async fn replace_projects(
        &self,
        projects: Vec<Project>,
    ) -> Result<PortfolioData, StoreError> {
        let _guard = self.edit_lock.lock().await;

        self.load_seeded().await?;
        self.medium.write_projects(&projects).await?;
        self.load_seeded().await
    }

    /// Appends a project keyed by the slug of its title and returns it.
    pub async fn append_project(&self, input: NewProject) -> Result<Project, StoreError> {
        input.validate()?;
        let _guard = self.edit_lock.lock().await;

        let mut projects = self.load_seeded().await?.projects;
        let id = ids::disambiguate(
            ids::slugify(&input.title),
            projects.iter().map(|p| p.id.as_str()),
        );
        let project = input.into_project(id);
        projects.push(project.clone());

        self.medium.write_projects(&projects).await?;
        Ok(project)
    }

    /// Removes every project with `id`. Removing an unknown id succeeds.
    pub async fn remove_project_by_id(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.edit_lock.lock().await;

        let mut projects = self.load_seeded().await?.projects;
        projects.retain(|p| p.id != id);
        self.medium.write_projects(&projects).await
    }
}

/// Builds the store for the configured medium. Nothing is read or connected
/// until the first request.
pub fn open_store(storage: &StorageConfig) -> PortfolioStore {
    match storage {
        StorageConfig::File(path) => PortfolioStore::new(FileMedium::new(path)),
        StorageConfig::Database(url) => {
            let provider = Arc::new(ConnectionProvider::new(url.as_str()));
            PortfolioStore::new(DatabaseMedium::new(provider))
        }
        StorageConfig::Memory => PortfolioStore::new(MemoryMedium::new()),
    }
}
