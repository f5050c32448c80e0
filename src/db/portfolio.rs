use sea_orm::*;
use serde_json::{Map, Value};

use crate::db::schema::{
    portfolio_profile, portfolio_projects, portfolio_sections, portfolio_skills,
};
use crate::error::StoreError;
use crate::models::{Profile, Project, Section, Skill, StoredContent};

/// Fetch everything the database holds, collections in stored order.
pub async fn fetch_content(db: &DatabaseConnection) -> Result<StoredContent, StoreError> {
    let profile = portfolio_profile::Entity::find_by_id(portfolio_profile::SINGLETON_ID)
        .one(db)
        .await?;
    let sections = portfolio_sections::Entity::find()
        .order_by_asc(portfolio_sections::Column::Position)
        .all(db)
        .await?;
    let skills = portfolio_skills::Entity::find()
        .order_by_asc(portfolio_skills::Column::Position)
        .all(db)
        .await?;
    let projects = portfolio_projects::Entity::find()
        .order_by_asc(portfolio_projects::Column::Position)
        .all(db)
        .await?;

    Ok(StoredContent {
        profile: profile.map(profile_from_row).transpose()?,
        sections: sections
            .into_iter()
            .map(section_from_row)
            .collect::<Result<_, _>>()?,
        skills: skills.into_iter().map(skill_from_row).collect(),
        projects: projects
            .into_iter()
            .map(project_from_row)
            .collect::<Result<_, _>>()?,
    })
}

/// Replace the profile row.
pub async fn replace_profile(db: &DatabaseConnection, profile: &Profile) -> Result<(), StoreError> {
    let txn = db.begin().await?;
    write_profile(&txn, profile).await?;
    txn.commit().await?;
    Ok(())
}

/// Replace the whole section collection.
pub async fn replace_sections(
    db: &DatabaseConnection,
    sections: &[Section],
) -> Result<(), StoreError> {
    let txn = db.begin().await?;
    write_sections(&txn, sections).await?;
    txn.commit().await?;
    Ok(())
}

/// Write the profile and section list of a fresh database in one transaction.
pub async fn seed(
    db: &DatabaseConnection,
    profile: &Profile,
    sections: &[Section],
) -> Result<(), StoreError> {
    let txn = db.begin().await?;
    write_profile(&txn, profile).await?;
    write_sections(&txn, sections).await?;
    txn.commit().await?;
    Ok(())
}

/// Replace the whole skill collection.
pub async fn replace_skills(db: &DatabaseConnection, skills: &[Skill]) -> Result<(), StoreError> {
    let rows: Vec<portfolio_skills::ActiveModel> = skills
        .iter()
        .enumerate()
        .map(|(position, skill)| portfolio_skills::ActiveModel {
            position: Set(position as i32),
            id: Set(skill.id.clone()),
            name: Set(skill.name.clone()),
            category: Set(skill.category.clone()),
            level: Set(skill.level.clone()),
            icon: Set(skill.icon.clone()),
        })
        .collect();

    let txn = db.begin().await?;
    portfolio_skills::Entity::delete_many().exec(&txn).await?;
    if !rows.is_empty() {
        portfolio_skills::Entity::insert_many(rows).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(())
}

/// Replace the whole project collection.
pub async fn replace_projects(
    db: &DatabaseConnection,
    projects: &[Project],
) -> Result<(), StoreError> {
    let rows = projects
        .iter()
        .enumerate()
        .map(|(position, project)| {
            Ok(portfolio_projects::ActiveModel {
                position: Set(position as i32),
                id: Set(project.id.clone()),
                title: Set(project.title.clone()),
                description: Set(project.description.clone()),
                role: Set(project.role.clone()),
                year: Set(project.year.clone()),
                images: Set(serde_json::to_value(&project.images)?),
                tags: Set(serde_json::to_value(&project.tags)?),
                tags_label: Set(project.tags_label.clone()),
                link: Set(project.link.clone()),
                github: Set(project.github.clone()),
                gallery: Set(serde_json::to_value(&project.gallery)?),
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    let txn = db.begin().await?;
    portfolio_projects::Entity::delete_many().exec(&txn).await?;
    if !rows.is_empty() {
        portfolio_projects::Entity::insert_many(rows).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(())
}

async fn write_profile<C: ConnectionTrait>(conn: &C, profile: &Profile) -> Result<(), StoreError> {
    let row = portfolio_profile::ActiveModel {
        id: Set(portfolio_profile::SINGLETON_ID),
        name: Set(profile.name.clone()),
        titles: Set(serde_json::to_value(&profile.titles)?),
        image: Set(profile.image.clone()),
        bio: Set(profile.bio.clone()),
        email: Set(profile.email.clone()),
        social: Set(serde_json::to_value(&profile.social)?),
    };

    portfolio_profile::Entity::delete_many().exec(conn).await?;
    portfolio_profile::Entity::insert(row).exec(conn).await?;
    Ok(())
}

async fn write_sections<C: ConnectionTrait>(
    conn: &C,
    sections: &[Section],
) -> Result<(), StoreError> {
    let rows: Vec<portfolio_sections::ActiveModel> = sections
        .iter()
        .enumerate()
        .map(|(position, section)| portfolio_sections::ActiveModel {
            position: Set(position as i32),
            id: Set(section.id.clone()),
            kind: Set(section.kind.clone()),
            enabled: Set(section.enabled),
            sort_order: Set(section.order),
            content: Set(Value::Object(section.content.clone())),
        })
        .collect();

    portfolio_sections::Entity::delete_many().exec(conn).await?;
    if !rows.is_empty() {
        portfolio_sections::Entity::insert_many(rows).exec(conn).await?;
    }
    Ok(())
}

fn profile_from_row(row: portfolio_profile::Model) -> Result<Profile, StoreError> {
    Ok(Profile {
        name: row.name,
        titles: serde_json::from_value(row.titles)?,
        image: row.image,
        bio: row.bio,
        email: row.email,
        social: serde_json::from_value(row.social)?,
    })
}

fn section_from_row(row: portfolio_sections::Model) -> Result<Section, StoreError> {
    let content: Map<String, Value> = serde_json::from_value(row.content)?;
    Ok(Section {
        id: row.id,
        kind: row.kind,
        enabled: row.enabled,
        order: row.sort_order,
        content,
    })
}

fn skill_from_row(row: portfolio_skills::Model) -> Skill {
    Skill {
        id: row.id,
        name: row.name,
        category: row.category,
        level: row.level,
        icon: row.icon,
    }
}

fn project_from_row(row: portfolio_projects::Model) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.id,
        title: row.title,
        description: row.description,
        role: row.role,
        year: row.year,
        images: serde_json::from_value(row.images)?,
        tags: serde_json::from_value(row.tags)?,
        tags_label: row.tags_label,
        link: row.link,
        github: row.github,
        gallery: serde_json::from_value(row.gallery)?,
    })
}
