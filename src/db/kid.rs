use crate::db::storage_service::StorageService;
use crate::{
    types::{error::AppError, kid::{DBKidCreate, DBKidPatch}},
    utils::token,
};
use chrono::Utc;
use entity::kid::{ActiveModel as KidActive, Column, Entity as Kid, Model as KidModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl StorageService {
    pub async fn list_kids(&self) -> Result<Vec<KidModel>, AppError> {
        Ok(Kid::find()
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_kid(&self, id: &str) -> Result<KidModel, AppError> {
        Ok(Kid::find_by_id(id.to_string())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Kid not found".into()))?)
    }

    pub async fn create_kid(&self, payload: DBKidCreate) -> Result<KidModel, AppError> {
        let now = Utc::now();
        let kid = KidActive {
            id: Set(token::new_id()),
            name: Set(payload.name),
            avatar_url: Set(payload.avatar_url),
            nice_score: Set(payload.nice_score),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(kid.insert(&self.database_connection).await?)
    }

    /// Only the fields present in `patch` change.
    pub async fn update_kid(&self, id: &str, patch: DBKidPatch) -> Result<KidModel, AppError> {
        let mut am: KidActive = self.get_kid(id).await?.into();

        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(avatar_url) = patch.avatar_url {
            am.avatar_url = Set(avatar_url);
        }
        if let Some(nice_score) = patch.nice_score {
            am.nice_score = Set(nice_score);
        }
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_kid(&self, id: &str) -> Result<(), AppError> {
        let res = Kid::delete_by_id(id.to_string())
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn count_kids(&self) -> Result<u64, AppError> {
        Ok(Kid::find().count(&self.database_connection).await?)
    }
}
