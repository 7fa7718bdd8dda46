//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind server to listener and shut down gracefully

use axum::{
    http::HeaderName,
    routing::{delete, get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin::{AdminGate, SessionStore};
use crate::config::RsvpConfig;
use crate::http::handlers;
use crate::http::request::X_REQUEST_ID;
use crate::rsvp::RsvpService;
use crate::store::RecordStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RsvpService>,
    pub config: Arc<RsvpConfig>,
}

impl AppState {
    /// Build the service graph from a validated configuration.
    pub fn from_config(config: RsvpConfig) -> Self {
        let store = RecordStore::new(&config.storage.data_file);
        let sessions = SessionStore::new(Duration::from_secs(config.admin.session_ttl_secs));
        let gate = AdminGate::new(config.admin.key.clone(), sessions);

        Self {
            service: Arc::new(RsvpService::new(store, gate)),
            config: Arc::new(config),
        }
    }
}

/// HTTP server for the RSVP backend.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RsvpConfig) -> Self {
        let state = AppState::from_config(config);
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            data_file = %self.state.service.store().path().display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RsvpConfig {
        &self.state.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);
    let timeout = Duration::from_secs(state.config.timeouts.request_secs);
    let body_limit = state.config.security.max_body_size;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/rsvp", post(handlers::submit))
        .route("/lista", get(handlers::list))
        .route("/sterge/{id}", delete(handlers::delete))
        .route("/stats", get(handlers::stats))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(TimeoutLayer::new(timeout)),
        )
}
