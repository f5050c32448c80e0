use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::StoreError;

/// The site owner's profile. There is exactly one per portfolio.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    /// Display titles shown in rotation. Older documents store a single
    /// `title` string, which is read as a one-element list.
    #[serde(default, alias = "title", deserialize_with = "one_or_many")]
    pub titles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    /// Social network name → profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl Profile {
    /// A profile needs a name and at least one non-blank title.
    pub fn validate(&self) -> Result<(), StoreError> {
        let has_title = self.titles.iter().any(|t| !t.trim().is_empty());
        if self.name.trim().is_empty() || !has_title {
            return Err(StoreError::Validation(
                "Name and title are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(title) => vec![title],
        OneOrMany::Many(titles) => titles,
    })
}

/// Request body for `PUT /api/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePayload {
    pub profile: Profile,
}
