use actix_web::{HttpResponse, web};

use super::collection_from;
use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::sections::SectionsPayload;
use crate::store::PortfolioStore;

/// GET /api/sections: every section, enabled or not, in stored order.
pub async fn get_sections(store: web::Data<PortfolioStore>) -> HttpResponse {
    let data = store.load().await;
    HttpResponse::Ok().json(serde_json::json!({ "sections": data.sections }))
}

/// PUT /api/sections: replace the whole section list (requires an admin session).
pub async fn update_sections(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<SectionsPayload>,
) -> Result<HttpResponse, ApiError> {
    let sections = collection_from(body.into_inner().sections, "Sections")?;

    let data = store
        .replace_sections(sections)
        .await
        .map_err(|e| ApiError::from_store("update_sections", "Failed to update sections", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "sections": data.sections,
    })))
}
