use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use entity::kid::Model as KidModel;

use crate::db::storage_service::StorageService;
use crate::types::kid::{DBKidCreate, DBKidPatch, RKidCreate, RKidUpdate};
use crate::types::response::{ApiResponse, ApiResult, SuccessRes};

#[get("")]
async fn list(
    db: web::Data<Arc<StorageService>>,
) -> ApiResult<Vec<KidModel>> {
    Ok(ApiResponse::Ok(db.list_kids().await?))
}

#[post("")]
async fn create(
    db: web::Data<Arc<StorageService>>,
    body: web::Json<RKidCreate>,
) -> ApiResult<KidModel> {
    let payload = DBKidCreate::try_from(body.into_inner())?;
    Ok(ApiResponse::Created(db.create_kid(payload).await?))
}

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<StorageService>>,
    id: web::Path<String>,
    body: web::Json<RKidUpdate>,
) -> ApiResult<KidModel> {
    let patch = DBKidPatch::try_from(body.into_inner())?;
    Ok(ApiResponse::Ok(db.update_kid(&id, patch).await?))
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<StorageService>>,
    id: web::Path<String>,
) -> ApiResult<SuccessRes> {
    db.delete_kid(&id).await?;
    Ok(ApiResponse::Ok(SuccessRes::ok()))
}
