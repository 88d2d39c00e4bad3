use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Log method and path of every request before it reaches its handler.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = request.uri().path(),
        "request"
    );
    next.run(request).await
}
