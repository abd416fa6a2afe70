use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Site-wide settings. There is only ever one row, keyed by [`MAIN_ID`].
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub elf_name: String,
    #[sea_orm(column_type = "Text")]
    pub welcome_message: String,
    pub elf_intro_video_url: Option<String>,
    pub updated_at: DateTimeUtc,
}

pub const MAIN_ID: &str = "main";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
