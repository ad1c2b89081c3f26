//! SurveyFlow server binary.
//!
//! Wires the in-memory adapters and the configured composer into the
//! application handlers, mounts the axum router, and runs a background
//! sweep that evicts expired sessions.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use secrecy::ExposeSecret;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use surveyflow::adapters::composer::{EchoComposer, OpenAiComposer, OpenAiComposerConfig};
use surveyflow::adapters::http::{api_router, catalog::CatalogHandlers, survey::SurveyHandlers};
use surveyflow::adapters::storage::{InMemoryQuestionCatalog, InMemorySessionStore};
use surveyflow::application::handlers::{
    CreateQuestionHandler, GetLinkHandler, IssueLinkHandler, ListAnswersHandler,
    ListQuestionsHandler, StartSessionHandler, SubmitMessageHandler,
};
use surveyflow::config::{AppConfig, ComposerBackend};
use surveyflow::ports::{ResponseComposer, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        composer = ?config.composer.backend,
        "starting surveyflow"
    );

    // ── Adapters ────────────────────────────────────────────────────────────
    let store = Arc::new(InMemorySessionStore::new());
    let catalog = Arc::new(InMemoryQuestionCatalog::new());
    let composer = build_composer(&config)?;

    let ttl = config.sessions.ttl();

    // ── Application handlers ────────────────────────────────────────────────
    let survey_handlers = SurveyHandlers::new(
        Arc::new(IssueLinkHandler::new(store.clone())),
        Arc::new(GetLinkHandler::new(store.clone(), ttl)),
        Arc::new(StartSessionHandler::new(
            store.clone(),
            catalog.clone(),
            composer.clone(),
            ttl,
        )),
        Arc::new(SubmitMessageHandler::new(
            store.clone(),
            composer.clone(),
            ttl,
        )),
        Arc::new(ListAnswersHandler::new(store.clone())),
    );
    let catalog_handlers = CatalogHandlers::new(
        Arc::new(ListQuestionsHandler::new(catalog.clone())),
        Arc::new(CreateQuestionHandler::new(catalog)),
    );

    if let Some(ttl_secs) = ttl {
        spawn_expiry_sweep(store.clone(), ttl_secs, config.sessions.sweep_interval_secs);
    }

    // ── Router ──────────────────────────────────────────────────────────────
    let app = api_router(survey_handlers, catalog_handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config)),
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_composer(config: &AppConfig) -> Result<Arc<dyn ResponseComposer>, Box<dyn std::error::Error>> {
    match config.composer.backend {
        ComposerBackend::Echo => Ok(Arc::new(EchoComposer::new())),
        ComposerBackend::OpenAi => {
            let api_key = config
                .composer
                .api_key
                .as_ref()
                .ok_or("composer api key is required for the openai backend")?;

            let composer_config = OpenAiComposerConfig::new(api_key.expose_secret().clone())
                .with_model(config.composer.model.clone())
                .with_base_url(config.composer.base_url.clone())
                .with_timeout(Duration::from_secs(config.composer.timeout_secs));

            Ok(Arc::new(OpenAiComposer::new(composer_config)?))
        }
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = if config.server.cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Periodically evicts sessions whose links have passed their TTL.
fn spawn_expiry_sweep(store: Arc<InMemorySessionStore>, ttl_secs: u64, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // First tick fires immediately; skip it so startup stays quiet.
        interval.tick().await;

        loop {
            interval.tick().await;
            match store.purge_expired(ttl_secs).await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "evicted expired sessions"),
                Err(e) => tracing::warn!(error = %e, "session sweep failed"),
            }
        }
    });
}
