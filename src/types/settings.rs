use serde::{Deserialize, Serialize};

use crate::utils::webutils::non_empty;

pub const DEFAULT_ELF_NAME: &str = "Sprinkles";

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RSettingsWrite {
    pub elf_name: Option<String>,
    pub welcome_message: Option<String>,
    pub elf_intro_video_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DBSettingsWrite {
    pub elf_name: String,
    pub welcome_message: String,
    pub elf_intro_video_url: Option<String>,
}

impl From<RSettingsWrite> for DBSettingsWrite {
    fn from(body: RSettingsWrite) -> Self {
        DBSettingsWrite {
            elf_name: non_empty(body.elf_name).unwrap_or_else(|| DEFAULT_ELF_NAME.to_string()),
            welcome_message: body.welcome_message.unwrap_or_default(),
            elf_intro_video_url: non_empty(body.elf_intro_video_url),
        }
    }
}
