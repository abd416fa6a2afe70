use std::sync::Arc;

use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use tracing::error;

use crate::config::EnvConfig;
use crate::utils::session::SessionAuthenticator;
use crate::utils::webutils::{removal_cookie, SESSION_COOKIE_NAME};

/// Always ends on the login page, even if the session could not be removed.
#[post("/logout")]
async fn logout(
    req: HttpRequest,
    auth: web::Data<Arc<SessionAuthenticator>>,
    config: web::Data<EnvConfig>,
) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        if let Err(e) = auth.delete_session(cookie.value()).await {
            error!("Logout error: {e}");
        }
    }

    let login_page = format!("{}/admin/login", config.base_url.trim_end_matches('/'));

    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header((header::LOCATION, login_page))
        .finish()
}
