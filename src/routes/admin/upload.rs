use actix_multipart::form::{bytes::Bytes as FilePart, MultipartForm};
use actix_web::{post, web};
use chrono::Utc;
use tracing::info;

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::upload::UploadRes;
use crate::utils::blob::BlobClient;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
/// 4.5 MiB
pub const MAX_IMAGE_BYTES: usize = 4_718_592;

#[derive(MultipartForm)]
pub struct UploadForm {
    #[multipart(limit = "8MiB")]
    pub file: Option<FilePart>,
}

#[post("")]
async fn upload(
    blob: web::Data<BlobClient>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> ApiResult<UploadRes> {
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let content_type = file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .filter(|ct| ALLOWED_IMAGE_TYPES.contains(&ct.as_str()))
        .ok_or_else(|| {
            AppError::Validation(
                "Invalid file type. Please upload a JPEG, PNG, GIF, or WebP image.".to_string(),
            )
        })?;

    if file.data.len() > MAX_IMAGE_BYTES {
        return Err(AppError::Validation("File too large. Maximum size is 4.5MB.".to_string()));
    }

    let pathname = format!(
        "elf-{}.{}",
        Utc::now().timestamp_millis(),
        extension_for(file.file_name.as_deref(), &content_type)
    );

    let url = blob.put(&pathname, &content_type, file.data).await?;
    info!("uploaded {pathname}");

    Ok(ApiResponse::Ok(UploadRes { url }))
}

/// Extension from the client's file name, falling back to the MIME subtype.
pub fn extension_for(file_name: Option<&str>, content_type: &str) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| {
            content_type
                .rsplit_once('/')
                .map(|(_, sub)| sub.to_string())
                .unwrap_or_else(|| "bin".to_string())
        })
}
