use crate::db::storage_service::StorageService;
use crate::types::{error::AppError, settings::DBSettingsWrite};
use chrono::Utc;
use entity::settings::{ActiveModel as SettingsActive, Entity as Settings, Model as SettingsModel, MAIN_ID};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl StorageService {
    /// `None` until the settings have been saved (or seeded) once.
    pub async fn get_settings(&self) -> Result<Option<SettingsModel>, AppError> {
        Ok(Settings::find_by_id(MAIN_ID.to_string())
            .one(&self.database_connection)
            .await?)
    }

    pub async fn upsert_settings(&self, payload: DBSettingsWrite) -> Result<SettingsModel, AppError> {
        let now = Utc::now();

        match self.get_settings().await? {
            Some(current) => {
                let mut am: SettingsActive = current.into();
                am.elf_name = Set(payload.elf_name);
                am.welcome_message = Set(payload.welcome_message);
                am.elf_intro_video_url = Set(payload.elf_intro_video_url);
                am.updated_at = Set(now);
                Ok(am.update(&self.database_connection).await?)
            }
            None => {
                let am = SettingsActive {
                    id: Set(MAIN_ID.to_string()),
                    elf_name: Set(payload.elf_name),
                    welcome_message: Set(payload.welcome_message),
                    elf_intro_video_url: Set(payload.elf_intro_video_url),
                    updated_at: Set(now),
                };
                Ok(am.insert(&self.database_connection).await?)
            }
        }
    }
}
