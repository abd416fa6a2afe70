use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kid::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Kid::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Kid::Name).string().not_null())
                    .col(ColumnDef::new(Kid::AvatarUrl).string().null())
                    .col(ColumnDef::new(Kid::NiceScore).integer().not_null().default(100))
                    .col(ColumnDef::new(Kid::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Kid::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kid::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Kid {
    Table,
    Id,
    Name,
    AvatarUrl,
    NiceScore,
    CreatedAt,
    UpdatedAt,
}
