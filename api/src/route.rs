use crate::helpers::request_log;
use crate::routes::report_route;
use crate::services::report_store::ReportStore;
use axum::{Router, middleware};

pub fn create_api_router(store: ReportStore) -> Router {
    Router::new()
        .nest("/api/v1", report_route::router())
        .layer(middleware::from_fn(request_log::log_requests))
        .with_state(store)
}
