use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A toggleable, orderable block of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, also used as the page anchor.
    pub id: String,
    /// hero | about | skills | projects | contact | ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Display position. Stored as given; never renumbered.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub content: Map<String, Value>,
}

fn enabled_by_default() -> bool {
    true
}

impl Section {
    pub fn new(id: &str, kind: &str, order: i64, title: &str) -> Self {
        let mut content = Map::new();
        content.insert("title".to_string(), Value::String(title.to_string()));
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            enabled: true,
            order,
            content,
        }
    }

    /// Navigation label: the section type with its first letter upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Body of `PUT /api/sections`.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionsPayload {
    pub sections: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let section: Section =
            serde_json::from_value(serde_json::json!({ "id": "faq", "type": "faq" })).unwrap();

        assert!(section.enabled);
        assert_eq!(section.order, 0);
        assert!(section.content.is_empty());
    }

    #[test]
    fn type_field_round_trips_under_its_wire_name() {
        let section = Section::new("about", "about", 1, "About Me");
        let value = serde_json::to_value(&section).unwrap();

        assert_eq!(value["type"], "about");
        assert_eq!(value["content"]["title"], "About Me");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn label_capitalizes_type() {
        assert_eq!(Section::new("p", "projects", 3, "").label(), "Projects");
        assert_eq!(Section::new("x", "", 0, "").label(), "");
    }
}
