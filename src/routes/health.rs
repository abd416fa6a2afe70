use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

/// Liveness only; does not touch the database.
#[get("")]
async fn health() -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
