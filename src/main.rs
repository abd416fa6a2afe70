use actix_web::{middleware::Logger, web, App, HttpServer};
use elf_visit::config::EnvConfig;
use elf_visit::db::storage_service::StorageService;
use elf_visit::routes::configure_routes;
use elf_visit::utils::{
    blob::BlobClient,
    clock::{Clock, SystemClock},
    reveal::RevealClock,
    session::SessionAuthenticator,
};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    if config.auth.admin_password.is_none() {
        warn!("ADMIN_PASSWORD is not set, the admin portal will reject every login");
    }

    let storage = Arc::new(
        StorageService::new(&config.db_url)
            .await
            .map_err(|e| io::Error::other(format!("Failed to initialize StorageService: {e}")))?,
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let auth = Arc::new(SessionAuthenticator::new(storage.clone(), &config.auth, clock.clone()));
    let gate = RevealClock::new(config.reveal_at, clock);
    let blob = BlobClient::new(&config.blob)
        .map_err(|e| io::Error::other(format!("Failed to build blob client: {e}")))?;

    match config.reveal_at {
        Some(at) => info!("Reveal gate set for {}", at.to_rfc3339()),
        None => info!("No REVEAL_AT set, the site is open"),
    }
    info!("Starting server on {}", addr);

    let config = web::Data::new(config);
    let storage = web::Data::new(storage);
    let auth = web::Data::new(auth);
    let gate = web::Data::new(gate);
    let blob = web::Data::new(blob);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(storage.clone())
            .app_data(auth.clone())
            .app_data(gate.clone())
            .app_data(blob.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
