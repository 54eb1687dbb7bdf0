use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request/response cycle: method, path, status code,
/// elapsed duration. Layered around every route with
/// `axum::middleware::from_fn`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "request {} {} {} {:?}",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );

    response
}
