use crate::types::error::AppError;
use crate::utils::webutils::require_admin_session;
use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{
    error::{JsonPayloadError, PayloadError},
    middleware::from_fn,
    web, HttpRequest,
};
use tracing::debug;

pub mod admin;
pub mod feed;
pub mod health;
pub mod reveal;

/// Upload size ceiling across the whole multipart body.
const UPLOAD_TOTAL_LIMIT: usize = 10 * 1024 * 1024;

/// Bad JSON bodies get the same `{error, message}` shape as everything else.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("rejected JSON body: {err}");
    AppError::Validation("Invalid JSON body".to_string()).into()
}

fn multipart_error(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    debug!("rejected upload: {err}");
    match err {
        MultipartError::Payload(PayloadError::Overflow) => {
            AppError::Validation("File too large. Maximum size is 4.5MB.".to_string()).into()
        }
        _ => AppError::Validation("Invalid upload form".to_string()).into(),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/reveal")
            .service(reveal::status)
            .service(reveal::stream)
    );
    cfg.service(
        web::scope("/api/feed").service(feed::feed)
    );
    cfg.service(
        web::scope("/api/admin")
            .service(admin::login::login)
            .service(admin::logout::logout)
            .service(
                web::scope("/dashboard")
                    .service(admin::dashboard::dashboard)
                    .wrap(from_fn(require_admin_session))
            )
            .service(
                web::scope("/posts")
                    .service(admin::posts::list)
                    .service(admin::posts::create)
                    .service(admin::posts::show)
                    .service(admin::posts::update)
                    .service(admin::posts::remove)
                    .wrap(from_fn(require_admin_session))
            )
            .service(
                web::scope("/kids")
                    .service(admin::kids::list)
                    .service(admin::kids::create)
                    .service(admin::kids::update)
                    .service(admin::kids::remove)
                    .wrap(from_fn(require_admin_session))
            )
            .service(
                web::scope("/settings")
                    .service(admin::settings::show)
                    .service(admin::settings::update)
                    .wrap(from_fn(require_admin_session))
            )
            .service(
                web::scope("/upload")
                    .app_data(
                        MultipartFormConfig::default()
                            .memory_limit(UPLOAD_TOTAL_LIMIT)
                            .total_limit(UPLOAD_TOTAL_LIMIT)
                            .error_handler(multipart_error)
                    )
                    .service(admin::upload::upload)
                    .wrap(from_fn(require_admin_session))
            )
    );
}
