use crate::db::storage_service::StorageService;
use crate::{
    types::{error::AppError, post::DBPostWrite},
    utils::token,
};
use chrono::{DateTime, Utc};
use entity::elf_post::{ActiveModel as PostActive, Column, Entity as Post, Model as PostModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl StorageService {
    /// Every post, newest publish date first.
    pub async fn list_posts(&self) -> Result<Vec<PostModel>, AppError> {
        Ok(Post::find()
            .order_by_desc(Column::PublishDate)
            .all(&self.database_connection)
            .await?)
    }

    /// What the public feed shows: published and already past its publish date.
    pub async fn list_published_posts(&self, now: DateTime<Utc>) -> Result<Vec<PostModel>, AppError> {
        Ok(Post::find()
            .filter(Column::IsPublished.eq(true))
            .filter(Column::PublishDate.lte(now))
            .order_by_desc(Column::PublishDate)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_post(&self, id: &str) -> Result<PostModel, AppError> {
        Ok(Post::find_by_id(id.to_string())
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Post not found".into()))?)
    }

    pub async fn create_post(&self, payload: DBPostWrite) -> Result<PostModel, AppError> {
        let now = Utc::now();
        let post = PostActive {
            id: Set(token::new_id()),
            title: Set(payload.title),
            message: Set(payload.message),
            location: Set(payload.location),
            image_url: Set(payload.image_url),
            publish_date: Set(payload.publish_date),
            is_published: Set(payload.is_published),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(post.insert(&self.database_connection).await?)
    }

    pub async fn update_post(&self, id: &str, payload: DBPostWrite) -> Result<PostModel, AppError> {
        let mut am: PostActive = self.get_post(id).await?.into();
        am.title = Set(payload.title);
        am.message = Set(payload.message);
        am.location = Set(payload.location);
        am.image_url = Set(payload.image_url);
        am.publish_date = Set(payload.publish_date);
        am.is_published = Set(payload.is_published);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let res = Post::delete_by_id(id.to_string())
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn count_posts(&self) -> Result<u64, AppError> {
        Ok(Post::find().count(&self.database_connection).await?)
    }
}
