//! Taskboard API server binary.
//!
//! Wires the MySQL repositories and the Redis broadcaster into the core
//! services and serves the HTTP surface. Configuration comes from the
//! environment (`.env` supported); a missing JWT secret or database URL is
//! fatal here, before the server ever binds.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use tb_api::app::create_app;
use tb_api::middleware::auth::AccessTokenVerifier;
use tb_api::routes::AppState;
use tb_core::services::auth::AuthService;
use tb_core::services::tasks::TaskService;
use tb_core::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};
use tb_infra::broadcast::RedisBroadcaster;
use tb_infra::database::{
    DatabasePool, MySqlNotificationRepository, MySqlTaskRepository, MySqlTokenRepository,
    MySqlUserRepository,
};
use tb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Taskboard API server");

    // Load configuration; missing required values are fatal at startup
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            log::error!("Configuration error: {}", message);
            std::process::exit(1);
        }
    };

    // Database pool and repositories
    let pool = match DatabasePool::new(&config.database).await {
        Ok(pool) => pool,
        Err(error) => {
            log::error!("Failed to connect to database: {}", error);
            std::process::exit(1);
        }
    };

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let task_repository = Arc::new(MySqlTaskRepository::new(pool.get_pool().clone()));
    let notification_repository =
        Arc::new(MySqlNotificationRepository::new(pool.get_pool().clone()));

    // Real-time broadcaster
    let broadcaster = match RedisBroadcaster::new(&config.broadcast).await {
        Ok(broadcaster) => Arc::new(broadcaster),
        Err(error) => {
            log::error!("Failed to connect to Redis: {}", error);
            std::process::exit(1);
        }
    };

    // Token service; refuses to start without a signing secret
    let token_config = TokenServiceConfig::from(config.auth.clone());
    let token_service = match TokenService::new(
        MySqlTokenRepository::new(pool.get_pool().clone()),
        token_config,
    ) {
        Ok(service) => Arc::new(service),
        Err(error) => {
            log::error!("Failed to initialize token service: {}", error);
            std::process::exit(1);
        }
    };

    // Periodic sweep of expired refresh tokens
    let _cleanup = TokenCleanupService::new(
        Arc::new(MySqlTokenRepository::new(pool.get_pool().clone())),
        TokenCleanupConfig::default(),
    )
    .spawn();

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
    ));
    let task_service = Arc::new(TaskService::new(
        task_repository,
        Arc::clone(&notification_repository),
        broadcaster,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        task_service,
        notifications: notification_repository,
        secure_cookies: config.environment.is_production(),
    });
    let verifier: Arc<dyn AccessTokenVerifier> = token_service;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&verifier)))
        .bind(&bind_address)?
        .run()
        .await
}
