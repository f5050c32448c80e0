use serde::Serialize;

use super::{PortfolioData, Profile, Project, Section, Skill};

/// Render-ready view of the portfolio served by `GET /api/page`.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub profile: Profile,
    pub sections: Vec<PageSection>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSection {
    pub label: String,
    #[serde(flatten)]
    pub section: Section,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

impl From<PortfolioData> for PageView {
    fn from(data: PortfolioData) -> Self {
        let mut sections: Vec<Section> = data.sections.into_iter().filter(|s| s.enabled).collect();
        // Stable sort: equal orders keep their collection order.
        sections.sort_by_key(|s| s.order);

        Self {
            profile: data.profile,
            sections: sections
                .into_iter()
                .map(|section| PageSection {
                    label: section.label(),
                    section,
                })
                .collect(),
            skill_groups: group_by_category(data.skills),
            projects: data.projects,
        }
    }
}

/// Buckets skills by category, categories in first-seen order.
fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }
    groups
}
