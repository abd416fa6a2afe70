use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::types::response::SuccessRes;
use crate::types::session::RLogin;
use crate::utils::session::SessionAuthenticator;
use crate::utils::webutils::session_cookie;

#[post("/login")]
async fn login(
    auth: web::Data<Arc<SessionAuthenticator>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RLogin>,
) -> Result<HttpResponse, AppError> {
    let password = match body.into_inner().password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(AppError::Validation("Password is required".to_string())),
    };

    if !auth.verify_password(&password) {
        return Err(AppError::Unauthorized);
    }

    let token = auth.create_session().await?;
    info!("admin session created");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, config.production))
        .json(SuccessRes::ok()))
}
