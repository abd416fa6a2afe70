use elf_visit::config::EnvConfig;
use elf_visit::db::storage_service::StorageService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();

    let storage = StorageService::new(&config.db_url).await?;
    let report = storage.seed_defaults().await?;

    println!("Database seeded: {:?}", report);
    Ok(())
}
