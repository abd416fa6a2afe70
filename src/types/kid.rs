use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::webutils::non_empty;

pub const DEFAULT_NICE_SCORE: i32 = 100;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RKidCreate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub nice_score: Option<i32>,
}

/// Partial update. Absent fields are left alone; an empty `avatarUrl` clears it.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RKidUpdate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub nice_score: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct DBKidCreate {
    pub name: String,
    pub avatar_url: Option<String>,
    pub nice_score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct DBKidPatch {
    pub name: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub nice_score: Option<i32>,
}

fn check_nice_score(score: i32) -> Result<i32, AppError> {
    if (0..=100).contains(&score) {
        Ok(score)
    } else {
        Err(AppError::Validation("Nice score must be between 0 and 100".to_string()))
    }
}

impl TryFrom<RKidCreate> for DBKidCreate {
    type Error = AppError;

    fn try_from(body: RKidCreate) -> Result<Self, Self::Error> {
        let name = non_empty(body.name)
            .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

        Ok(DBKidCreate {
            name,
            avatar_url: non_empty(body.avatar_url),
            nice_score: check_nice_score(body.nice_score.unwrap_or(DEFAULT_NICE_SCORE))?,
        })
    }
}

impl TryFrom<RKidUpdate> for DBKidPatch {
    type Error = AppError;

    fn try_from(body: RKidUpdate) -> Result<Self, Self::Error> {
        let name = match body.name {
            Some(raw) => Some(
                non_empty(Some(raw)).ok_or_else(|| AppError::Validation("Name cannot be empty".to_string()))?,
            ),
            None => None,
        };

        Ok(DBKidPatch {
            name,
            avatar_url: body.avatar_url.map(|url| non_empty(Some(url))),
            nice_score: body.nice_score.map(check_nice_score).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_full_marks() {
        let kid = DBKidCreate::try_from(RKidCreate { name: Some("Ellie".into()), ..Default::default() }).unwrap();
        assert_eq!(kid.nice_score, 100);
        assert_eq!(kid.avatar_url, None);
    }

    #[test]
    fn create_needs_a_name() {
        assert!(DBKidCreate::try_from(RKidCreate::default()).is_err());
        assert!(DBKidCreate::try_from(RKidCreate { name: Some(" ".into()), ..Default::default() }).is_err());
    }

    #[test]
    fn score_bounds() {
        for bad in [-1, 101] {
            let body = RKidUpdate { nice_score: Some(bad), ..Default::default() };
            assert!(DBKidPatch::try_from(body).is_err());
        }
        let patch = DBKidPatch::try_from(RKidUpdate { nice_score: Some(0), ..Default::default() }).unwrap();
        assert_eq!(patch.nice_score, Some(0));
    }

    #[test]
    fn empty_avatar_clears() {
        let patch = DBKidPatch::try_from(RKidUpdate { avatar_url: Some(String::new()), ..Default::default() }).unwrap();
        assert_eq!(patch.avatar_url, Some(None));
        assert_eq!(patch.name, None);
    }
}
