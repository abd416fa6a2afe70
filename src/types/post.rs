use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::types::error::AppError;
use crate::utils::{time::parse_instant, webutils::non_empty};

/// Body of POST and PUT on `/api/admin/posts`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RPostWrite {
    pub title: Option<String>,
    pub message: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub publish_date: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct DBPostWrite {
    pub title: String,
    pub message: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub is_published: bool,
}

impl TryFrom<RPostWrite> for DBPostWrite {
    type Error = AppError;

    fn try_from(body: RPostWrite) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation("Title, message, and publish date are required".to_string());

        let title = non_empty(body.title).ok_or_else(missing)?;
        let message = non_empty(body.message).ok_or_else(missing)?;
        let raw_date = non_empty(body.publish_date).ok_or_else(missing)?;
        let publish_date = parse_instant(&raw_date)
            .ok_or_else(|| AppError::Validation(format!("Invalid publish date: {raw_date}")))?;

        Ok(DBPostWrite {
            title,
            message,
            location: non_empty(body.location),
            image_url: non_empty(body.image_url),
            publish_date,
            is_published: body.is_published.unwrap_or(true),
        })
    }
}
