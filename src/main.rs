pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::portfolio;

use crate::config::{AppConfig, StoreKind};
use crate::portfolio::adapter::outgoing::{FileKeyValueStore, InMemoryKeyValueStore};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::KeyValueStore;
use crate::portfolio::application::services::{
    persistence::PortfolioPersistence, session::PortfolioSession, view_renderer::ViewRenderer,
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

/// Restores the session from `store` and wires the use cases around it.
///
/// The returned store handle shares state with the session and backs the
/// readiness probe.
async fn bootstrap<S>(store: S, renderer: ViewRenderer) -> (AppState, Arc<dyn KeyValueStore>)
where
    S: KeyValueStore + Clone + 'static,
{
    let probe: Arc<dyn KeyValueStore> = Arc::new(store.clone());
    let session = Arc::new(PortfolioSession::hydrate(PortfolioPersistence::new(store)).await);
    let state = AppState {
        portfolio: PortfolioUseCases::from_session(session, renderer),
    };
    (state, probe)
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

    let config = AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let renderer = ViewRenderer::new(config.visibility);
    let (state, store_probe) = match config.store {
        StoreKind::File => {
            info!("Using file store at {}", config.store_dir.display());
            bootstrap(FileKeyValueStore::new(&config.store_dir), renderer).await
        }
        StoreKind::Memory => {
            warn!("Using in-memory store; edits will not survive a restart");
            bootstrap(InMemoryKeyValueStore::new(), renderer).await
        }
    };

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", server_url);

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store_probe)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_document_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::toggle_edit_mode_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_personal_info_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_social_link_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_summary_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_profile_picture_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::remove_skill_handler);

    // Theme
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_theme_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::toggle_theme_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
