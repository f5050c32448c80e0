//! HTTP-level tests for the portfolio API, run against an in-memory store.
//!
//! Run with: `cargo test --test api_test`
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};
use std::time::Duration;

use folio_backend::PortfolioStore;
use folio_backend::auth::AuthGate;
use folio_backend::auth::session::SESSION_COOKIE;
use folio_backend::handlers;
use folio_backend::models::{NewProject, NewSkill};
use folio_backend::store::MemoryMedium;

const TEST_PASSWORD: &str = "correct horse battery staple";

fn state() -> (web::Data<PortfolioStore>, web::Data<AuthGate>) {
    (
        web::Data::new(PortfolioStore::new(MemoryMedium::new())),
        web::Data::new(AuthGate::new(TEST_PASSWORD, Duration::from_secs(600), false)),
    )
}

/// Builds the service the way `main` mounts it.
macro_rules! init_app {
    ($store:expr, $gate:expr) => {
        test::init_service(
            App::new()
                .app_data($store)
                .app_data($gate)
                .app_data(handlers::json_config())
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

/// Logs in and evaluates to the session cookie.
macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(serde_json::json!({ "action": "login", "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 200);
        session_cookie(&resp)
    }};
}

fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .expect("login should set the session cookie")
        .into_owned()
}

#[actix_web::test]
async fn visitors_get_the_seeded_defaults() {
    let (store, gate) = state();
    let app = init_app!(store, gate);

    let req = test::TestRequest::get().uri("/api/sections").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = body["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["hero", "about", "skills", "projects", "contact"]);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["skills"], serde_json::json!([]));

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["profile"]["name"], "John Doe");
}

/// Puts one known skill (`go`) and one known project (`atlas`) in the store.
async fn populate(store: &PortfolioStore) {
    let skill = NewSkill {
        name: "Go".to_string(),
        category: "Backend".to_string(),
        ..NewSkill::default()
    }
    .into_skill("go".to_string());
    let project = NewProject {
        title: "Atlas".to_string(),
        description: "Maps".to_string(),
        ..NewProject::default()
    }
    .into_project("atlas".to_string());

    store.replace_skills(vec![skill]).await.unwrap();
    store.replace_projects(vec![project]).await.unwrap();
}

#[actix_web::test]
async fn mutations_without_a_session_are_rejected_and_change_nothing() {
    let (store, gate) = state();
    populate(&store).await;
    let before = store.load().await;
    let app = init_app!(store.clone(), gate);

    let requests = vec![
        test::TestRequest::put()
            .uri("/api/profile")
            .set_json(serde_json::json!({ "profile": { "name": "Eve", "title": "Intruder" } })),
        test::TestRequest::put().uri("/api/sections").set_json(serde_json::json!({
            "sections": [{ "id": "pwned", "type": "hero", "enabled": true, "order": 0 }]
        })),
        test::TestRequest::post()
            .uri("/api/skills")
            .set_json(serde_json::json!({ "name": "Rust", "category": "Systems" })),
        test::TestRequest::put().uri("/api/skills").set_json(serde_json::json!({
            "skills": [{ "id": "evil", "name": "Evil", "category": "Evil" }]
        })),
        test::TestRequest::delete().uri("/api/skills?id=go"),
        test::TestRequest::post()
            .uri("/api/projects")
            .set_json(serde_json::json!({ "title": "X", "description": "y" })),
        test::TestRequest::put().uri("/api/projects").set_json(serde_json::json!({
            "projects": [{ "id": "evil", "title": "Evil", "description": "Evil" }]
        })),
        test::TestRequest::delete().uri("/api/projects?id=atlas"),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    let after = store.load().await;
    assert_eq!(after, before);
    assert_eq!(after.skills[0].id, "go");
    assert_eq!(after.projects[0].id, "atlas");
}

#[actix_web::test]
async fn delete_without_an_id_is_a_bad_request() {
    let (store, gate) = state();
    populate(&store).await;
    let before = store.load().await;
    let app = init_app!(store.clone(), gate);
    let cookie = login!(app);

    let cases = [
        ("/api/skills", "Skill ID is required"),
        ("/api/skills?id=", "Skill ID is required"),
        ("/api/projects", "Project ID is required"),
        ("/api/projects?id=", "Project ID is required"),
    ];
    for (uri, message) in cases {
        let req = test::TestRequest::delete()
            .uri(uri)
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{uri}");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message);
    }

    assert_eq!(store.load().await, before);
}

#[actix_web::test]
async fn forged_cookie_is_not_a_session() {
    let (store, gate) = state();
    let app = init_app!(store, gate);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .cookie(Cookie::new(SESSION_COOKIE, "authenticated"))
        .set_json(serde_json::json!({ "name": "Go", "category": "Backend" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn login_status_and_logout() {
    let (store, gate) = state();
    let app = init_app!(store, gate);

    let req = test::TestRequest::get().uri("/api/auth").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["authenticated"], false);

    let cookie = login!(app);
    assert_eq!(cookie.http_only(), Some(true));

    let req = test::TestRequest::get()
        .uri("/api/auth")
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["authenticated"], true);

    let req = test::TestRequest::post()
        .uri("/api/auth")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "action": "logout" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The old marker is dead even if the browser keeps sending it.
    let req = test::TestRequest::get()
        .uri("/api/auth")
        .cookie(cookie)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["authenticated"], false);
}

#[actix_web::test]
async fn bad_logins_are_rejected() {
    let (store, gate) = state();
    let app = init_app!(store, gate);

    let cases: [(serde_json::Value, u16, &str); 4] = [
        (serde_json::json!({ "action": "login", "password": "nope" }), 401, "Invalid password"),
        (serde_json::json!({ "action": "login", "password": "" }), 400, "Password is required"),
        (serde_json::json!({ "action": "login" }), 400, "Password is required"),
        (serde_json::json!({ "action": "dance" }), 400, "Invalid action"),
    ];

    for (payload, status, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
        assert!(resp.response().cookies().next().is_none());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message);
    }
}

#[actix_web::test]
async fn profile_update_round_trips_and_validates() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let profile = serde_json::json!({
        "name": "Ada Lovelace",
        "titles": ["Engineer", "Writer"],
        "bio": "First programmer.",
        "email": "ada@example.com",
        "social": { "github": "https://github.com/ada" }
    });
    let req = test::TestRequest::put()
        .uri("/api/profile")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "profile": profile }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["profile"], profile);

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["profile"], profile);

    let req = test::TestRequest::put()
        .uri("/api/profile")
        .cookie(cookie)
        .set_json(serde_json::json!({ "profile": { "name": "", "title": "Engineer" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn sections_must_be_an_array() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let req = test::TestRequest::put()
        .uri("/api/sections")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "sections": { "id": "hero" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Sections must be an array");

    let sections = serde_json::json!([
        { "id": "contact", "type": "contact", "enabled": true, "order": 3, "content": {} },
        { "id": "hero", "type": "hero", "enabled": false, "order": 3, "content": { "title": "Hi" } }
    ]);
    let req = test::TestRequest::put()
        .uri("/api/sections")
        .cookie(cookie)
        .set_json(serde_json::json!({ "sections": sections }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["sections"], sections);

    let req = test::TestRequest::get().uri("/api/sections").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["sections"], sections);
}

#[actix_web::test]
async fn skill_create_replace_and_delete() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "name": "Go", "category": "Backend", "level": "Advanced" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let id = body["skill"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(body["skill"]["level"], "Advanced");

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "name": "Go" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["skills"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri("/api/skills")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/skills?id={id}"))
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let replacement = serde_json::json!([
        { "id": "a", "name": "Figma", "category": "Design", "icon": "figma" }
    ]);
    let req = test::TestRequest::put()
        .uri("/api/skills")
        .cookie(cookie)
        .set_json(serde_json::json!({ "skills": replacement }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["skills"], replacement);
}

#[actix_web::test]
async fn project_create_and_idempotent_delete() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "title": "My Cool Project!", "description": "x" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["project"]["id"], "my-cool-project!");
    assert_eq!(body["project"]["images"], serde_json::json!([]));

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "title": "No description" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Title and description are required");

    let req = test::TestRequest::delete()
        .uri("/api/projects?id=does-not-exist")
        .cookie(cookie.clone())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["projects"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn malformed_json_body_is_a_bad_request() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let req = test::TestRequest::put()
        .uri("/api/skills")
        .cookie(cookie)
        .insert_header(("content-type", "application/json"))
        .set_payload("{ nope")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn page_view_lists_enabled_sections_in_order() {
    let (store, gate) = state();
    let app = init_app!(store, gate);
    let cookie = login!(app);

    let req = test::TestRequest::put()
        .uri("/api/sections")
        .cookie(cookie)
        .set_json(serde_json::json!({ "sections": [
            { "id": "contact", "type": "contact", "order": 2 },
            { "id": "about", "type": "about", "order": 1, "enabled": false },
            { "id": "hero", "type": "hero", "order": 0 }
        ] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/api/page").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let labels: Vec<&str> = body["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Hero", "Contact"]);
    assert_eq!(body["sections"][0]["id"], "hero");

    let req = test::TestRequest::get().uri("/api/portfolio").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["sections"].as_array().unwrap().len(), 3);
}
