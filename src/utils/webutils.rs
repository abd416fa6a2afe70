use std::sync::Arc;

use actix_web::{
    body::{EitherBody, MessageBody},
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::config::SESSION_TTL_HOURS;
use crate::types::error::AppError;
use crate::utils::session::SessionAuthenticator;

pub const SESSION_COOKIE_NAME: &str = "elf_admin_session";

/// `Some(trimmed)` when the value has anything besides whitespace in it.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, token)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::hours(SESSION_TTL_HOURS))
        .path("/")
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .finish();
    cookie.make_removal();
    cookie
}

/// Guards admin scopes: the request must carry a cookie for a live session.
/// Rejections are rendered here so callers always get a response back.
pub async fn require_admin_session<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let token = req.cookie(SESSION_COOKIE_NAME).map(|c| c.value().to_string());

    let auth = req
        .app_data::<web::Data<Arc<SessionAuthenticator>>>()
        .cloned();

    let rejection = match (token, auth) {
        (_, None) => AppError::Internal("session authenticator not registered".to_string()),
        (None, _) => AppError::Unauthorized,
        (Some(token), Some(auth)) => match auth.validate_session(&token).await {
            Ok(true) => return next.call(req).await.map(ServiceResponse::map_into_left_body),
            Ok(false) => AppError::Unauthorized,
            Err(e) => e,
        },
    };

    Ok(req.error_response(rejection).map_into_right_body())
}
