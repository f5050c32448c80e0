use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Free-text grouping key.
    pub category: String,
    /// Proficiency label, e.g. "Advanced".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Icon name or image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ── DTOs ──

/// Body of `POST /api/skills`: a skill without its id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub level: Option<String>,
    pub icon: Option<String>,
}

impl NewSkill {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(StoreError::Validation(
                "Name and category are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_skill(self, id: String) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            level: self.level,
            icon: self.icon,
        }
    }
}

/// Body of `PUT /api/skills`.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsPayload {
    pub skills: Option<serde_json::Value>,
}
