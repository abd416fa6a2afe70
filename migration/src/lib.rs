pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_admin_session_table;
mod m20251101_000002_create_elf_post_table;
mod m20251101_000003_create_kid_table;
mod m20251101_000004_create_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_admin_session_table::Migration),
            Box::new(m20251101_000002_create_elf_post_table::Migration),
            Box::new(m20251101_000003_create_kid_table::Migration),
            Box::new(m20251101_000004_create_settings_table::Migration),
        ]
    }
}
