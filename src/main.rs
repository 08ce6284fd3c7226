pub mod modules;
pub use modules::auth;
pub use modules::storages;
pub mod health;

mod api;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::storages::adapter::outgoing::peripherals::{
    build_http_client, config::StorageInteractionConfig, registry::StorageInteractionRegistry,
};
use crate::storages::adapter::outgoing::{
    run_audit_logger, ProjectPermissionQueryPostgres, ProjectStorageEventBus,
    ProjectStorageRepositoryPostgres,
};
use crate::storages::application::service::DeleteProjectStorageService;
use crate::storages::application::storage_use_cases::StorageUseCases;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct AppState {
    pub storages: StorageUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let event_capacity = env::var("PROJECT_STORAGE_EVENT_CAPACITY")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_EVENT_CAPACITY);

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Storage providers
    let storage_config = StorageInteractionConfig::from_env();
    let http = build_http_client(&storage_config).map_err(|e| {
        tracing::error!("Failed to build storage HTTP client: {}", e);
        std::io::Error::other(e)
    })?;
    let remote_folders = StorageInteractionRegistry::new(http, &storage_config);

    // Events
    let event_bus = ProjectStorageEventBus::new(event_capacity);
    tokio::spawn(run_audit_logger(event_bus.subscribe()));

    let project_storage_repo = ProjectStorageRepositoryPostgres::new(Arc::clone(&db_arc));
    let permission_query = ProjectPermissionQueryPostgres::new(Arc::clone(&db_arc));

    let delete_project_storage_service = DeleteProjectStorageService::new(
        Arc::new(project_storage_repo),
        Arc::new(permission_query),
        Arc::new(remote_folders),
        Arc::new(event_bus),
    );

    let state = AppState {
        storages: StorageUseCases {
            delete_project_storage: Arc::new(delete_project_storage_service),
        },
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Project storages
    cfg.service(crate::storages::adapter::incoming::web::routes::delete_project_storage_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
