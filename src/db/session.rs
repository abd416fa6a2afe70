use crate::db::storage_service::StorageService;
use crate::{types::error::AppError, utils::token};
use chrono::{DateTime, Utc};
use entity::admin_session::{
    ActiveModel as SessionActive, Column, Entity as Session, Model as SessionModel,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl StorageService {
    pub async fn insert_admin_session(
        &self,
        token_hash: String,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let id = token::new_id();
        Session::insert(SessionActive {
            id: Set(id.clone()),
            token_hash: Set(token_hash),
            expires_at: Set(expires_at),
            created_at: Set(now),
        })
        .exec_without_returning(&self.database_connection)
        .await?;
        Ok(id)
    }

    /// Sessions that are still valid at `now`.
    pub async fn list_live_admin_sessions(&self, now: DateTime<Utc>) -> Result<Vec<SessionModel>, AppError> {
        Ok(Session::find()
            .filter(Column::ExpiresAt.gt(now))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_admin_sessions(&self) -> Result<Vec<SessionModel>, AppError> {
        Ok(Session::find().all(&self.database_connection).await?)
    }

    pub async fn delete_admin_session(&self, id: &str) -> Result<(), AppError> {
        Session::delete_by_id(id.to_string())
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    /// Hard-delete every session whose expiry is before `now`.
    pub async fn purge_expired_admin_sessions(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let res = Session::delete_many()
            .filter(Column::ExpiresAt.lt(now))
            .exec(&self.database_connection)
            .await?;
        Ok(res.rows_affected)
    }
}
