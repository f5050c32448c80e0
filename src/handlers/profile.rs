use actix_web::{HttpResponse, web};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::profile::ProfilePayload;
use crate::store::PortfolioStore;

/// GET /api/profile: the site owner's profile.
pub async fn get_profile(store: web::Data<PortfolioStore>) -> HttpResponse {
    let data = store.load().await;
    HttpResponse::Ok().json(serde_json::json!({ "profile": data.profile }))
}

/// PUT /api/profile: replace the profile (requires an admin session).
pub async fn update_profile(
    _admin: AdminSession,
    store: web::Data<PortfolioStore>,
    body: web::Json<ProfilePayload>,
) -> Result<HttpResponse, ApiError> {
    let data = store
        .replace_profile(body.into_inner().profile)
        .await
        .map_err(|e| ApiError::from_store("update_profile", "Failed to update profile", e))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "profile": data.profile,
    })))
}
