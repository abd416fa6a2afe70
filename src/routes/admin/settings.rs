use std::sync::Arc;

use actix_web::{get, put, web};
use entity::settings::Model as SettingsModel;

use crate::db::storage_service::StorageService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::settings::{DBSettingsWrite, RSettingsWrite};

#[get("")]
async fn show(
    db: web::Data<Arc<StorageService>>,
) -> ApiResult<Option<SettingsModel>> {
    Ok(ApiResponse::Ok(db.get_settings().await?))
}

#[put("")]
async fn update(
    db: web::Data<Arc<StorageService>>,
    body: web::Json<RSettingsWrite>,
) -> ApiResult<SettingsModel> {
    let payload = DBSettingsWrite::from(body.into_inner());
    Ok(ApiResponse::Ok(db.upsert_settings(payload).await?))
}
