use actix_web::web::Bytes;
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::BlobConfig;
use crate::types::error::AppError;
use crate::types::upload::BlobPutRes;

const BLOB_API_VERSION: &str = "7";

/// Thin client for the blob store that holds uploaded images.
#[derive(Clone)]
pub struct BlobClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl BlobClient {
    pub fn new(config: &BlobConfig) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .user_agent("elf_visit/0.1 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Stores `data` under `pathname` with public access and returns its URL.
    pub async fn put(&self, pathname: &str, content_type: &str, data: Bytes) -> Result<String, AppError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AppError::Internal("BLOB_READ_WRITE_TOKEN is not set".to_string()))?;

        let url = format!("{}/{}", self.api_url, pathname);
        let size = data.len();
        debug!("[blob] -> PUT {url} ({size} bytes, {content_type})");

        let t0 = Instant::now();
        let res = self
            .client
            .put(&url)
            .bearer_auth(token) // do NOT log the token
            .header("x-api-version", BLOB_API_VERSION)
            .header("x-content-type", content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("blob upload failed: {e}")))?;

        let status = res.status();
        info!("[blob] <- status: {status} in {} ms", t0.elapsed().as_millis());

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("blob store returned HTTP {status}: {body}")));
        }

        let stored: BlobPutRes = res
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("unreadable blob store response: {e}")))?;
        Ok(stored.url)
    }
}
