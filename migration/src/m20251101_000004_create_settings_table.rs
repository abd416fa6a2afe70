use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Settings::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Settings::ElfName).string().not_null().default("Sprinkles"))
                    .col(ColumnDef::new(Settings::WelcomeMessage).text().not_null())
                    .col(ColumnDef::new(Settings::ElfIntroVideoUrl).string().null())
                    .col(ColumnDef::new(Settings::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
    ElfName,
    WelcomeMessage,
    ElfIntroVideoUrl,
    UpdatedAt,
}
