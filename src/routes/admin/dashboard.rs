use std::sync::Arc;

use actix_web::{get, web};

use crate::db::storage_service::StorageService;
use crate::types::feed::DashboardRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn dashboard(
    db: web::Data<Arc<StorageService>>,
) -> ApiResult<DashboardRes> {
    Ok(ApiResponse::Ok(DashboardRes {
        posts_count: db.count_posts().await?,
        kids_count: db.count_kids().await?,
        settings: db.get_settings().await?,
    }))
}
