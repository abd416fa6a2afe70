use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use elf_visit::config::{AuthConfig, BlobConfig, EnvConfig, SESSION_TTL_HOURS};
use elf_visit::db::storage_service::StorageService;
use elf_visit::utils::clock::ManualClock;

pub mod client;

pub const TEST_PASSWORD: &str = "north-pole-2025";

pub struct TestContext {
    pub db: Arc<StorageService>,
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db = Arc::new(
            StorageService::in_memory()
                .await
                .expect("Failed to initialize StorageService")
        );

        TestContext {
            db,
            clock: Arc::new(ManualClock::new(start_time())),
        }
    }
}

/// Where every test's clock starts.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 20, 12, 0, 0).unwrap()
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(), // Not used in tests
        base_url: "http://localhost:3000".to_string(),
        production: false,
        auth: AuthConfig {
            admin_password: Some(TEST_PASSWORD.to_string()),
            session_ttl_hours: SESSION_TTL_HOURS,
        },
        reveal_at: None,
        default_video_url: None,
        blob: BlobConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            token: Some("test-blob-token".to_string()),
        },
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use elf_visit::types::kid::RKidCreate;
    use elf_visit::types::post::RPostWrite;
    use serde_json::{json, Value};

    pub fn sample_post() -> Value {
        json!({
            "title": "Sprinkles Went Sledding",
            "message": "I found your sled and took it for a spin down the banister!",
            "location": "Staircase",
            "publishDate": "2025-12-02T07:00:00Z"
        })
    }

    pub fn post_write(title: &str, publish_date: &str, is_published: bool) -> RPostWrite {
        RPostWrite {
            title: Some(title.to_string()),
            message: Some("Elf business.".to_string()),
            publish_date: Some(publish_date.to_string()),
            is_published: Some(is_published),
            ..Default::default()
        }
    }

    pub fn kid(name: &str) -> RKidCreate {
        RKidCreate {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// Builds a `multipart/form-data` body with a single file field.
#[allow(dead_code)]
pub fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----elfboundary7MA4YWxkTrZu0gW";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n").as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
