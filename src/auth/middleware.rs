use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

use crate::auth::session::AuthGate;
use crate::error::ApiError;

/// Extractor that only succeeds for requests carrying a live admin session.
/// Put it first in a handler's arguments so nothing else runs for
/// unauthenticated callers.
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticated = req
            .app_data::<web::Data<AuthGate>>()
            .is_some_and(|gate| gate.is_authenticated(req));

        ready(if authenticated {
            Ok(AdminSession)
        } else {
            Err(ApiError::Unauthorized)
        })
    }
}
