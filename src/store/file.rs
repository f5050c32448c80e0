use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::ContentMedium;
use crate::error::StoreError;
use crate::models::{Profile, Project, Section, Skill, StoredContent, defaults};

/// Content kept in one pretty-printed JSON document with the top-level keys
/// `profile`, `sections`, `skills` and `projects`.
///
/// Each write rewrites the whole document into a sibling temp file and
/// renames it over the original, so a failed write leaves the old document
/// intact.
pub struct FileMedium {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileMedium {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> Result<Option<StoredContent>, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_document(&self, content: &StoredContent) -> Result<(), StoreError> {
        let mut text = serde_json::to_string_pretty(content)?;
        text.push('\n');

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "Saved portfolio document");
        Ok(())
    }

    /// Applies `edit` to the current document and saves it.
    async fn update<F>(&self, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut StoredContent) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut content = self.read_document().await?.unwrap_or_default();
        edit(&mut content);
        if content.profile.is_none() {
            content.profile = Some(defaults::profile());
        }
        self.save_document(&content).await
    }
}

#[async_trait]
impl ContentMedium for FileMedium {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn read(&self) -> Result<StoredContent, StoreError> {
        Ok(self.read_document().await?.unwrap_or_default())
    }

    async fn write_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.update(|c| c.profile = Some(profile.clone())).await
    }

    async fn write_sections(&self, sections: &[Section]) -> Result<(), StoreError> {
        self.update(|c| c.sections = sections.to_vec()).await
    }

    async fn write_skills(&self, skills: &[Skill]) -> Result<(), StoreError> {
        self.update(|c| c.skills = skills.to_vec()).await
    }

    async fn write_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.update(|c| c.projects = projects.to_vec()).await
    }

    async fn write_seed(&self, profile: &Profile, sections: &[Section]) -> Result<(), StoreError> {
        self.update(|c| {
            c.profile = Some(profile.clone());
            c.sections = sections.to_vec();
        })
        .await
    }
}
