use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ElfPost::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ElfPost::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(ElfPost::Title).string().not_null())
                    .col(ColumnDef::new(ElfPost::Message).text().not_null())
                    .col(ColumnDef::new(ElfPost::Location).string().null())
                    .col(ColumnDef::new(ElfPost::ImageUrl).string().null())
                    .col(ColumnDef::new(ElfPost::PublishDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(ElfPost::IsPublished).boolean().not_null().default(true))
                    .col(ColumnDef::new(ElfPost::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(ElfPost::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_elf_post_publish_date")
                    .table(ElfPost::Table)
                    .col(ElfPost::PublishDate)
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ElfPost::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ElfPost {
    Table,
    Id,
    Title,
    Message,
    Location,
    ImageUrl,
    PublishDate,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
