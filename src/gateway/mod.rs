pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{Router, middleware::from_fn, routing::any};
use tokio::net::TcpListener;

use crate::config::{GatewayConfig, ServiceProfile};
pub use error::GatewayError;

/// Build the route table for `profile`.
///
/// Unmatched paths fall through to axum's default 404.
pub fn router(profile: ServiceProfile) -> Router {
    let mut app = Router::new().route("/orders", any(handlers::create_order));

    if profile.has_health_check() {
        app = app.route("/health", any(handlers::health_check));
    }

    if profile.logs_requests() {
        app = app.layer(from_fn(middleware::log_request));
    }

    app
}

/// Bind the listening socket described by `config`.
pub async fn bind(config: &GatewayConfig) -> Result<TcpListener, GatewayError> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })
}

/// Accept connections on `listener` until the process is terminated.
///
/// Each connection is served on its own task.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), GatewayError> {
    axum::serve(listener, app)
        .await
        .map_err(GatewayError::Serve)
}

/// Start HTTP Gateway server: bind, announce, then serve forever.
pub async fn run_server(
    service: &str,
    config: &GatewayConfig,
    app: Router,
) -> Result<(), GatewayError> {
    let listener = bind(config).await.inspect_err(|e| {
        if let GatewayError::Bind { source, .. } = e {
            if source.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Hint: port {} may already be in use. Check with: lsof -i :{}",
                    config.port,
                    config.port
                );
            }
        }
    })?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        "{} starting on :{}",
        service,
        port
    );

    serve(listener, app).await
}
