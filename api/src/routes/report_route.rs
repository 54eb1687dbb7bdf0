use crate::handlers::report_handler;
use crate::services::report_store::ReportStore;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router() -> Router<ReportStore> {
    Router::new()
        .route(
            "/report",
            post(report_handler::create_report).get(report_handler::list_reports),
        )
        .route(
            "/report/:id",
            get(report_handler::fetch_report)
                .put(report_handler::update_report)
                .delete(report_handler::delete_report),
        )
}
