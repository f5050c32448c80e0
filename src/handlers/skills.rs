use actix_web::{HttpResponse, web};
use tracing::info;

use super::collection_from;
use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::skills::SkillsPayload;
use crate::models::{IdQuery, NewSkill};
use crate::store::PortfolioStore;

/// GET /api/skills
pub async fn get_skills(store: web::Data<PortfolioStore>) -> HttpResponse {
    let data = store.load().await;
    HttpResponse::Ok().json(serde_json::json!({ "skills": data.skills }))
}

/// POST /api/skills: append one skill; the id is generated.
pub async fn create_skill(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<NewSkill>,
) -> Result<HttpResponse, ApiError> {
    let skill = store
        .append_skill(body.into_inner())
        .await
        .map_err(|e| ApiError::from_store("create_skill", "Failed to create skill", e))?;

    info!(id = %skill.id, "Created skill");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "skill": skill })))
}

/// PUT /api/skills: replace the whole skill list.
pub async fn update_skills(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<SkillsPayload>,
) -> Result<HttpResponse, ApiError> {
    let skills = collection_from(body.into_inner().skills, "Skills")?;

    let data = store
        .replace_skills(skills)
        .await
        .map_err(|e| ApiError::from_store("update_skills", "Failed to update skills", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "skills": data.skills,
    })))
}

/// DELETE /api/skills?id=<id>: remove a skill. Unknown ids succeed.
pub async fn delete_skill(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = query
        .id()
        .ok_or_else(|| ApiError::BadRequest("Skill ID is required".to_string()))?;

    store
        .remove_skill_by_id(id)
        .await
        .map_err(|e| ApiError::from_store("delete_skill", "Failed to delete skill", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
