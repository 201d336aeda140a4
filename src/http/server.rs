//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Inject the store binding and view settings as shared state
//! - Wire up middleware (request ids, tracing, body limit, security headers)
//! - Serve until shutdown is triggered or an OS signal arrives

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer};

use crate::config::{BoardConfig, SecurityConfig};
use crate::http::handlers::{create_message, delete_message, health, list_messages};
use crate::http::request::with_request_tracing;
use crate::lifecycle::shutdown::ShutdownListener;
use crate::lifecycle::signals::wait_for_signal;
use crate::store::{Binding, MessageStore};
use crate::views::ViewSettings;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    pub binding: Binding<S>,
    pub view: Arc<ViewSettings>,
}

/// HTTP server for the message board.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store binding.
    pub fn new<S: MessageStore>(config: &BoardConfig, binding: Binding<S>) -> Self {
        let state = AppState {
            binding,
            view: Arc::new(ViewSettings::from_config(&config.display)),
        };

        Self {
            router: build_router(config, state),
        }
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => tracing::info!("Shutdown triggered"),
                    _ = wait_for_signal() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router<S: MessageStore>(config: &BoardConfig, state: AppState<S>) -> Router {
    let router = Router::new()
        .route("/", get(list_messages::<S>).post(create_message::<S>))
        .route("/delete/{id}", post(delete_message::<S>))
        .route("/healthz", get(health::<S>))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

    with_request_tracing(with_security_headers(router, &config.security))
}

fn with_security_headers(router: Router, security: &SecurityConfig) -> Router {
    if !security.enable_headers {
        return router;
    }

    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
