use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One entry of a project's extended gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grid span hint for the gallery layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Slug derived from the title at creation time.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Image references; the first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<ProjectImage>,
}

// ── DTOs ──

/// Body of `POST /api/projects`: a project without its id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub role: String,
    pub year: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub tags_label: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    #[serde(default)]
    pub gallery: Vec<ProjectImage>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(StoreError::Validation(
                "Title and description are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            role: self.role,
            year: self.year,
            images: self.images.unwrap_or_default(),
            tags: self.tags,
            tags_label: self.tags_label,
            link: self.link,
            github: self.github,
            gallery: self.gallery,
        }
    }
}

/// Body of `PUT /api/projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsPayload {
    pub projects: Option<serde_json::Value>,
}
