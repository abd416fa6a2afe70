use actix_web::{cookie::Cookie, web, App};
use std::sync::Arc;
use elf_visit::{
    config::EnvConfig,
    db::storage_service::StorageService,
    utils::{
        blob::BlobClient,
        clock::{Clock, ManualClock},
        reveal::RevealClock,
        session::SessionAuthenticator,
        webutils::SESSION_COOKIE_NAME,
    },
};

use super::{get_test_config, TestContext};

pub struct TestClient {
    pub db: Arc<StorageService>,
    pub clock: Arc<ManualClock>,
    pub config: EnvConfig,
    pub auth: Arc<SessionAuthenticator>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        Self::with_config(ctx, get_test_config())
    }

    pub fn with_config(ctx: &TestContext, config: EnvConfig) -> Self {
        let clock: Arc<dyn Clock> = ctx.clock.clone();
        let auth = Arc::new(SessionAuthenticator::new(ctx.db.clone(), &config.auth, clock));
        TestClient {
            db: ctx.db.clone(),
            clock: ctx.clock.clone(),
            config,
            auth,
        }
    }

    pub fn gate(&self) -> RevealClock {
        RevealClock::new(self.config.reveal_at, self.clock.clone())
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let blob = BlobClient::new(&self.config.blob).expect("Failed to build blob client");

        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.auth)))
            .app_data(web::Data::new(self.gate()))
            .app_data(web::Data::new(blob))
            .configure(elf_visit::routes::configure_routes)
    }

    /// Skips the login endpoint and hands back a live session token.
    pub async fn create_admin_session(&self) -> String {
        self.auth
            .create_session()
            .await
            .expect("Failed to create admin session")
    }

    pub fn session_cookie(token: &str) -> Cookie<'static> {
        Cookie::new(SESSION_COOKIE_NAME, token.to_string())
    }
}
