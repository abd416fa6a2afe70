use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use entity::elf_post::Model as PostModel;

use crate::db::storage_service::StorageService;
use crate::types::post::{DBPostWrite, RPostWrite};
use crate::types::response::{ApiResponse, ApiResult, SuccessRes};

#[get("")]
async fn list(
    db: web::Data<Arc<StorageService>>,
) -> ApiResult<Vec<PostModel>> {
    Ok(ApiResponse::Ok(db.list_posts().await?))
}

#[post("")]
async fn create(
    db: web::Data<Arc<StorageService>>,
    body: web::Json<RPostWrite>,
) -> ApiResult<PostModel> {
    let payload = DBPostWrite::try_from(body.into_inner())?;
    Ok(ApiResponse::Created(db.create_post(payload).await?))
}

#[get("/{id}")]
async fn show(
    db: web::Data<Arc<StorageService>>,
    id: web::Path<String>,
) -> ApiResult<PostModel> {
    Ok(ApiResponse::Ok(db.get_post(&id).await?))
}

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<StorageService>>,
    id: web::Path<String>,
    body: web::Json<RPostWrite>,
) -> ApiResult<PostModel> {
    let payload = DBPostWrite::try_from(body.into_inner())?;
    Ok(ApiResponse::Ok(db.update_post(&id, payload).await?))
}

#[delete("/{id}")]
async fn remove(
    db: web::Data<Arc<StorageService>>,
    id: web::Path<String>,
) -> ApiResult<SuccessRes> {
    db.delete_post(&id).await?;
    Ok(ApiResponse::Ok(SuccessRes::ok()))
}
