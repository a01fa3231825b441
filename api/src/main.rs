use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use vc_api::app::create_app;
use vc_api::routes::AppState;
use vc_core::services::auth::AuthService;
use vc_core::services::password::PasswordHasher;
use vc_core::services::token::{TokenService, TokenServiceConfig};
use vc_infra::{
    create_pool, MySqlAccountRepository, MySqlFeedbackRepository, MySqlNotificationRepository,
    MySqlProfileRepository,
};
use vc_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VishConnect API server");

    // Load configuration; a missing database URL or JWT secret is fatal
    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    info!("Environment: {:?}", config.environment);

    // Database pool, shared by every repository
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;

    // Repositories
    let account_repository = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let profile_repository = Arc::new(MySqlProfileRepository::new(pool.clone()));
    let feedback_repository = Arc::new(MySqlFeedbackRepository::new(pool.clone()));
    let notification_repository = Arc::new(MySqlNotificationRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::new(
        TokenServiceConfig::new(&config.auth.jwt.secret)
            .with_expiry_seconds(config.auth.jwt.token_expiry)
            .with_issuer(&config.auth.jwt.issuer),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&account_repository),
        Arc::clone(&token_service),
        PasswordHasher::default(),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        token_service,
        profile_repository,
        feedback_repository,
        notification_repository,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
