//! Server assembly: tracing, dependency wiring and HTTP layers.

use std::sync::Arc;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::{report_router, FileReportRepository, InMemoryReportRepository, ReportAppState};
use crate::config::{AppConfig, ConfigError, ServerConfig, StorageBackend, ValidationError};
use crate::domain::dispatch::ConceptDispatcher;
use crate::ports::ReportRepository;

/// Install the global tracing subscriber.
///
/// Production logs are JSON; everything else uses the human-readable format.
/// `RUST_LOG` overrides `server.log_level` when set.
pub fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if server.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        warn!("Tracing subscriber already installed");
    }
}

/// Build the report repository selected by `storage.backend`.
pub fn build_repository(config: &AppConfig) -> Result<Arc<dyn ReportRepository>, ConfigError> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryReportRepository::new())),
        StorageBackend::File => {
            let path = config
                .storage
                .path
                .as_ref()
                .ok_or(ValidationError::MissingRequired("storage.path"))?;
            Ok(Arc::new(FileReportRepository::new(path)))
        }
    }
}

/// Wire the parameter table, dispatcher and repository into the application state.
pub fn build_state(config: &AppConfig) -> Result<ReportAppState, ConfigError> {
    let table = config.engineering.load_table()?;
    info!(
        industries = table.industries().count(),
        source = ?config.engineering.parameter_table_path,
        "Parameter table loaded"
    );

    let dispatcher = Arc::new(ConceptDispatcher::new(Arc::new(table)));
    let repository = build_repository(config)?;
    info!(backend = ?config.storage.backend, "Report storage ready");

    Ok(ReportAppState::new(repository, dispatcher))
}

/// Build the full router with tracing, CORS and timeout layers.
pub fn build_app(config: &AppConfig) -> Result<Router, ConfigError> {
    let state = build_state(config)?;

    Ok(report_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout())))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if !origins.is_empty() {
        layer.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}
