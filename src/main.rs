//! LinkHub server entrypoint
//!
//! Startup order matters: configuration first, then logging (the guard
//! must stay alive), then storage with migrations, then the HTTP server.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use std::sync::Arc;
use tracing::warn;

use linkhub::api::services::{AppStartTime, api_v1_routes, health_check};
use linkhub::config::{CorsConfig, get_config, init_config};
use linkhub::services::{ClickService, LinkService, ProfileService, UserService};
use linkhub::storage::StorageFactory;
use linkhub::system::init_logging;

/// Build CORS middleware from configuration
fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    // When CORS is disabled, use browser's default same-origin policy (restrictive)
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();

    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");

    if cors_config.allowed_origins.is_empty() || is_any_origin {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors.allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allow_any_header()
        .max_age(cors_config.max_age as usize)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_config();
    let config = get_config();

    let _log_guard = init_logging(&config);

    // Record application start time
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let storage = StorageFactory::create().await?;

    let user_service = Arc::new(UserService::new(storage.clone()));
    let link_service = Arc::new(LinkService::new(storage.clone()));
    let profile_service = Arc::new(ProfileService::new(storage.clone()));
    let click_service = Arc::new(ClickService::new(storage.clone()));

    let cors_config = config.cors.clone();
    let cpu_count = config.server.cpu_count.min(32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        let cors = build_cors_middleware(&cors_config);

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(profile_service.clone()))
            .app_data(web::Data::new(click_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .service(web::scope("/api").service(api_v1_routes()))
            .route("/healthz", web::get().to(health_check))
            .route("/healthz", web::head().to(health_check))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
