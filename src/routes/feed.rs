use std::sync::Arc;

use actix_web::{get, web};

use crate::config::EnvConfig;
use crate::db::storage_service::StorageService;
use crate::types::feed::{FeedRes, LockedFeed, OpenFeed};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::settings::DEFAULT_ELF_NAME;
use crate::utils::reveal::RevealClock;

#[get("")]
async fn feed(
    db: web::Data<Arc<StorageService>>,
    gate: web::Data<RevealClock>,
    config: web::Data<EnvConfig>,
) -> ApiResult<FeedRes> {
    if !gate.is_revealed() {
        return Ok(ApiResponse::Ok(FeedRes::Locked(LockedFeed {
            revealed: false,
            countdown: gate.time_until_reveal(),
        })));
    }

    let settings = db.get_settings().await?;
    let posts = db.list_published_posts(gate.now()).await?;
    let kids = db.list_kids().await?;

    let (elf_name, welcome_message, video_url) = match settings {
        Some(s) => (s.elf_name, Some(s.welcome_message), s.elf_intro_video_url),
        None => (DEFAULT_ELF_NAME.to_string(), None, None),
    };

    Ok(ApiResponse::Ok(FeedRes::Open(OpenFeed {
        revealed: true,
        elf_name: if elf_name.trim().is_empty() { DEFAULT_ELF_NAME.to_string() } else { elf_name },
        welcome_message: welcome_message.filter(|m| !m.is_empty()),
        elf_intro_video_url: video_url.or_else(|| config.default_video_url.clone()),
        posts,
        kids,
    })))
}
