use chrono::{DateTime, Utc};
use entity::{elf_post::Model as PostModel, kid::Model as KidModel, settings::Model as SettingsModel};
use serde::Serialize;

use crate::utils::reveal::Countdown;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RevealStatusRes {
    pub revealed: bool,
    pub reveal_at: Option<DateTime<Utc>>,
    pub countdown: Countdown,
}

/// Public feed. Before the reveal only the countdown is sent.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum FeedRes {
    Locked(LockedFeed),
    Open(OpenFeed),
}

#[derive(Serialize, Debug)]
pub struct LockedFeed {
    pub revealed: bool,
    pub countdown: Countdown,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenFeed {
    pub revealed: bool,
    pub elf_name: String,
    pub welcome_message: Option<String>,
    pub elf_intro_video_url: Option<String>,
    pub posts: Vec<PostModel>,
    pub kids: Vec<KidModel>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRes {
    pub posts_count: u64,
    pub kids_count: u64,
    pub settings: Option<SettingsModel>,
}
