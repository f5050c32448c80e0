use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::AuthGate;
use crate::auth::session::session_marker;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub action: String,
    pub password: Option<String>,
}

/// GET /api/auth: whether the caller holds a live admin session.
pub async fn status(req: HttpRequest, gate: web::Data<AuthGate>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "authenticated": gate.is_authenticated(&req),
    }))
}

/// POST /api/auth: `{"action": "login", "password": ...}` starts a session,
/// `{"action": "logout"}` ends it.
pub async fn login_or_logout(
    req: HttpRequest,
    gate: web::Data<AuthGate>,
    body: web::Json<AuthRequest>,
) -> Result<HttpResponse, ApiError> {
    let AuthRequest { action, password } = body.into_inner();

    match action.as_str() {
        "login" => {
            let password = password
                .filter(|p| !p.is_empty())
                .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

            if !gate.verify(&password) {
                warn!("Rejected admin login attempt");
                return Err(ApiError::InvalidCredentials("Invalid password".to_string()));
            }

            let marker = gate.issue_session().await;
            info!("Admin session started");
            Ok(HttpResponse::Ok()
                .cookie(gate.session_cookie(marker))
                .json(serde_json::json!({ "success": true })))
        }
        "logout" => {
            if let Some(marker) = session_marker(&req) {
                gate.clear_session(&marker).await;
            }
            info!("Admin session ended");
            Ok(HttpResponse::Ok()
                .cookie(gate.removal_cookie())
                .json(serde_json::json!({ "success": true })))
        }
        _ => Err(ApiError::BadRequest("Invalid action".to_string())),
    }
}
