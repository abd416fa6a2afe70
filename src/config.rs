use std::env;

use chrono::{DateTime, Utc};

use crate::utils::time::parse_instant;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub base_url: String,
    pub production: bool,
    pub auth: AuthConfig,
    pub reveal_at: Option<DateTime<Utc>>,
    pub default_video_url: Option<String>,
    pub blob: BlobConfig,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// `None` means nobody can log in.
    pub admin_password: Option<String>,
    pub session_ttl_hours: i64,
}

#[derive(Clone, Debug)]
pub struct BlobConfig {
    pub api_url: String,
    pub token: Option<String>,
}

pub const SESSION_TTL_HOURS: i64 = 24;
const DEFAULT_BLOB_API_URL: &str = "https://blob.vercel-storage.com";

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_password: None,
            session_ttl_hours: SESSION_TTL_HOURS,
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_opt(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");

        let reveal_at = Self::get_env_opt("REVEAL_AT").map(|raw| {
            parse_instant(&raw)
                .unwrap_or_else(|| panic!("REVEAL_AT is not a valid ISO-8601 instant: {}", raw))
        });

        EnvConfig {
            port: Self::get_env_opt("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url,
            base_url: Self::get_env_opt("BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            production: Self::get_env_opt("APP_ENV").as_deref() == Some("production"),
            auth: AuthConfig {
                admin_password: Self::get_env_opt("ADMIN_PASSWORD"),
                session_ttl_hours: SESSION_TTL_HOURS,
            },
            reveal_at,
            default_video_url: Self::get_env_opt("ELF_INTRO_VIDEO_URL"),
            blob: BlobConfig {
                api_url: Self::get_env_opt("BLOB_API_URL")
                    .unwrap_or_else(|| DEFAULT_BLOB_API_URL.to_string()),
                token: Self::get_env_opt("BLOB_READ_WRITE_TOKEN"),
            },
        }
    }
}
