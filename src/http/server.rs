//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the API handlers under `/api`
//! - Serve the browser UI from the asset directory with SPA fallback
//! - Wire up middleware (request ID, tracing, CORS, request timeout)
//! - Serve on a listener until shutdown
//!
//! Routing precedence: API routes, then static assets, then the entry document.

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::error::ApiError;
use crate::http::{handlers, vpn};
use crate::lifecycle::Shutdown;
use crate::upstream::{AuthConfig, UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// HTTP server for the web UI backend.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, UpstreamError> {
        let auth = AuthConfig::resolve(&config.credentials);
        let client = UpstreamClient::new(&config.upstream, &auth)?;

        let router = Self::build_router(&config, AppState { client });
        Ok(Self { router, config })
    }

    /// API routes, relative to `/api`.
    fn api_routes(state: AppState) -> Router {
        Router::new()
            .route("/status", get(handlers::status))
            .route("/publicip", get(handlers::public_ip))
            .route("/portforwarded", get(handlers::port_forwarded))
            .route("/settings", get(handlers::settings))
            .route("/dns", get(handlers::dns))
            .route("/health", get(handlers::health))
            .route("/vpn/{action}", put(vpn::set_vpn_state))
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(state)
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let assets = ServeDir::new(&config.assets.dir)
            .fallback(ServeFile::new(config.assets.index_path()));

        let router = Router::new()
            .nest("/api", Self::api_routes(state))
            .fallback_service(assets)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            request_id = %request_id(request),
                            method = %request.method(),
                            path = %request.uri().path(),
                        )
                    }))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.listener.request_timeout_secs))),
            );

        if config.assets.cors_enabled {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            assets = %self.config.assets.dir.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(Shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
