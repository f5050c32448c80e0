use actix_web::{HttpResponse, web};
use tracing::info;

use super::collection_from;
use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::projects::ProjectsPayload;
use crate::models::{IdQuery, NewProject};
use crate::store::PortfolioStore;

/// GET /api/projects
pub async fn get_projects(store: web::Data<PortfolioStore>) -> HttpResponse {
    let data = store.load().await;
    HttpResponse::Ok().json(serde_json::json!({ "projects": data.projects }))
}

/// POST /api/projects: append one project keyed by the slug of its title.
pub async fn create_project(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<NewProject>,
) -> Result<HttpResponse, ApiError> {
    let project = store
        .append_project(body.into_inner())
        .await
        .map_err(|e| ApiError::from_store("create_project", "Failed to create project", e))?;

    info!(id = %project.id, "Created project");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "project": project })))
}

/// PUT /api/projects: replace the whole project list.
pub async fn update_projects(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<ProjectsPayload>,
) -> Result<HttpResponse, ApiError> {
    let projects = collection_from(body.into_inner().projects, "Projects")?;

    let data = store
        .replace_projects(projects)
        .await
        .map_err(|e| ApiError::from_store("update_projects", "Failed to update projects", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "projects": data.projects,
    })))
}

/// DELETE /api/projects?id=<id>: remove a project. Unknown ids succeed.
pub async fn delete_project(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = query
        .id()
        .ok_or_else(|| ApiError::BadRequest("Project ID is required".to_string()))?;

    store
        .remove_project_by_id(id)
        .await
        .map_err(|e| ApiError::from_store("delete_project", "Failed to delete project", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
