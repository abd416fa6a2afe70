use crate::db::storage_service::StorageService;
use crate::types::{error::AppError, settings::DEFAULT_ELF_NAME};
use chrono::Utc;
use entity::{
    elf_post::{ActiveModel as PostActive, Entity as Post},
    kid::{ActiveModel as KidActive, Entity as Kid},
    settings::{ActiveModel as SettingsActive, Entity as Settings, MAIN_ID},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use tracing::info;

const WELCOME_MESSAGE: &str = "Ho ho ho! Welcome to Sprinkles' magical corner! I'm Santa's special scout elf, here to watch over Ellie and Aniyah this holiday season!";
const WELCOME_POST_ID: &str = "welcome-post";
const WELCOME_POST_TITLE: &str = "Sprinkles Has Arrived!";
const WELCOME_POST_MESSAGE: &str = "Hello Ellie and Aniyah! I'm Sprinkles, your scout elf from the North Pole! Santa sent me to watch over you this Christmas season. I'll be hiding in different spots around your house - can you find me each morning? Remember, no touching! If you touch me, I might lose my magic! Be good, and I'll report wonderful things to Santa!";

const KIDS: [(&str, &str); 2] = [("ellie", "Ellie"), ("aniyah", "Aniyah")];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub settings: bool,
    pub kids: usize,
    pub posts: usize,
}

impl StorageService {
    /// Inserts the starter rows. Rows that already exist are left alone, so
    /// this is safe to run on every deploy.
    pub async fn seed_defaults(&self) -> Result<SeedReport, AppError> {
        let db = &self.database_connection;
        let now = Utc::now();
        let mut report = SeedReport::default();

        if Settings::find_by_id(MAIN_ID.to_string()).one(db).await?.is_none() {
            SettingsActive {
                id: Set(MAIN_ID.to_string()),
                elf_name: Set(DEFAULT_ELF_NAME.to_string()),
                welcome_message: Set(WELCOME_MESSAGE.to_string()),
                elf_intro_video_url: Set(None),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;
            report.settings = true;
        }

        for (id, name) in KIDS {
            if Kid::find_by_id(id.to_string()).one(db).await?.is_some() {
                continue;
            }
            KidActive {
                id: Set(id.to_string()),
                name: Set(name.to_string()),
                avatar_url: Set(None),
                nice_score: Set(100),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;
            report.kids += 1;
        }

        if Post::find_by_id(WELCOME_POST_ID.to_string()).one(db).await?.is_none() {
            PostActive {
                id: Set(WELCOME_POST_ID.to_string()),
                title: Set(WELCOME_POST_TITLE.to_string()),
                message: Set(WELCOME_POST_MESSAGE.to_string()),
                location: Set(Some("Living Room".to_string())),
                image_url: Set(None),
                publish_date: Set(now),
                is_published: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;
            report.posts += 1;
        }

        info!(
            settings = report.settings,
            kids = report.kids,
            posts = report.posts,
            "seeding finished"
        );
        Ok(report)
    }
}
