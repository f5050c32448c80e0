//! Content written to a fresh medium and served when the medium fails.

use std::collections::BTreeMap;

use super::{Profile, Section};

pub fn profile() -> Profile {
    Profile {
        name: "John Doe".to_string(),
        titles: vec!["Full Stack Developer".to_string()],
        image: None,
        bio: "Passionate developer building amazing web experiences.".to_string(),
        email: "john@example.com".to_string(),
        social: BTreeMap::new(),
    }
}

/// hero, about, skills, projects, contact; all enabled, ordered 0..=4.
pub fn sections() -> Vec<Section> {
    vec![
        Section::new("hero", "hero", 0, "Hi, I'm John"),
        Section::new("about", "about", 1, "About Me"),
        Section::new("skills", "skills", 2, "My Skills"),
        Section::new("projects", "projects", 3, "Featured Projects"),
        Section::new("contact", "contact", 4, "Get In Touch"),
    ]
}
