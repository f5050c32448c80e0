pub mod auth;
pub mod portfolio;
pub mod profile;
pub mod projects;
pub mod sections;
pub mod skills;

use actix_web::{error::InternalError, web};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Public reads; writes require an admin session (AdminSession extractor) ──
    cfg.service(
        web::resource("/portfolio").route(web::get().to(portfolio::get_portfolio)),
    );
    cfg.service(web::resource("/page").route(web::get().to(portfolio::get_page)));

    cfg.service(
        web::resource("/profile")
            .route(web::get().to(profile::get_profile))
            .route(web::put().to(profile::update_profile)),
    );

    cfg.service(
        web::resource("/sections")
            .route(web::get().to(sections::get_sections))
            .route(web::put().to(sections::update_sections)),
    );

    cfg.service(
        web::resource("/skills")
            .route(web::get().to(skills::get_skills))
            .route(web::post().to(skills::create_skill))
            .route(web::put().to(skills::update_skills))
            .route(web::delete().to(skills::delete_skill)),
    );

    cfg.service(
        web::resource("/projects")
            .route(web::get().to(projects::get_projects))
            .route(web::post().to(projects::create_project))
            .route(web::put().to(projects::update_projects))
            .route(web::delete().to(projects::delete_project)),
    );

    // ── Admin login/logout ──
    cfg.service(
        web::resource("/auth")
            .route(web::get().to(auth::status))
            .route(web::post().to(auth::login_or_logout)),
    );
}

/// Turns JSON body errors into `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = actix_web::ResponseError::error_response(&ApiError::BadRequest(
            format!("Invalid request body: {err}"),
        ));
        InternalError::from_response(err, response).into()
    })
}

/// Decodes a `{ "<collection>": [...] }` body field into records.
fn collection_from<T: DeserializeOwned>(
    value: Option<Value>,
    label: &str,
) -> Result<Vec<T>, ApiError> {
    match value {
        Some(items @ Value::Array(_)) => serde_json::from_value(items)
            .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {e}", label.to_lowercase()))),
        _ => Err(ApiError::BadRequest(format!("{label} must be an array"))),
    }
}
