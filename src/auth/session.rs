use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time};
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin-auth";

/// Checks the admin password and tracks the sessions it has issued.
///
/// A session marker is a random UUID held in a cache that expires it after
/// the session lifetime. Markers are lost on restart.
#[derive(Clone)]
pub struct AuthGate {
    secret: String,
    sessions: Cache<String, ()>,
    ttl: Duration,
    secure_cookies: bool,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>, ttl: Duration, secure_cookies: bool) -> Self {
        let sessions = Cache::builder().time_to_live(ttl).build();
        Self {
            secret: secret.into(),
            sessions,
            ttl,
            secure_cookies,
        }
    }

    /// True only for the exact configured secret. An empty password never
    /// matches.
    pub fn verify(&self, password: &str) -> bool {
        !password.is_empty() && password == self.secret
    }

    /// Registers a new session and returns its marker.
    pub async fn issue_session(&self) -> String {
        let marker = Uuid::new_v4().to_string();
        self.sessions.insert(marker.clone(), ()).await;
        marker
    }

    pub async fn clear_session(&self, marker: &str) {
        self.sessions.invalidate(marker).await;
    }

    pub fn is_valid(&self, marker: &str) -> bool {
        self.sessions.contains_key(marker)
    }

    /// Whether `req` carries the cookie of a live session.
    pub fn is_authenticated(&self, req: &HttpRequest) -> bool {
        session_marker(req).is_some_and(|marker| self.is_valid(&marker))
    }

    /// The cookie that hands `marker` to the browser.
    pub fn session_cookie(&self, marker: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, marker)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(time::Duration::try_from(self.ttl).unwrap_or(time::Duration::MAX))
            .finish()
    }

    /// A cookie that tells the browser to drop the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// The session marker carried by `req`, if any.
pub fn session_marker(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
