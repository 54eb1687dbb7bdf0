use crate::models::report::Report;
use crate::services::report_store::ReportStore;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::HashMap;

#[utoipa::path(
    post,
    path = "/api/v1/report",
    tag = "reports",
    request_body = Report,
    responses(
        (status = 200, description = "Stored report", body = Report),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_report(State(store): State<ReportStore>, body: Bytes) -> Response {
    let report = match decode_report(&body) {
        Ok(report) => report,
        Err(rejection) => return rejection,
    };

    store.put(report.clone());
    json_pretty(StatusCode::OK, &report)
}

#[utoipa::path(
    get,
    path = "/api/v1/report/{id}",
    tag = "reports",
    params(("id" = String, Path, description = "Report identifier")),
    responses(
        (status = 200, description = "Stored report", body = Report),
        (status = 204, description = "No report with this id")
    )
)]
pub async fn fetch_report(State(store): State<ReportStore>, Path(id): Path<String>) -> Response {
    match store.get(&id) {
        Some(report) => json_pretty(StatusCode::OK, &report),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/report",
    tag = "reports",
    responses(
        (status = 200, description = "All stored reports keyed by id", body = HashMap<String, Report>)
    )
)]
pub async fn list_reports(State(store): State<ReportStore>) -> Response {
    json_pretty(StatusCode::OK, &store.all())
}

#[utoipa::path(
    put,
    path = "/api/v1/report/{id}",
    tag = "reports",
    params(("id" = String, Path, description = "Report identifier (the body's id keys the update)")),
    request_body = Report,
    responses(
        (status = 200, description = "Updated report", body = Report),
        (status = 204, description = "No report with the body's id"),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn update_report(
    State(store): State<ReportStore>,
    Path(_id): Path<String>,
    body: Bytes,
) -> Response {
    let report = match decode_report(&body) {
        Ok(report) => report,
        Err(rejection) => return rejection,
    };

    // Existence is keyed by the body's id; the path segment only addresses
    // the route.
    if store.get(&report.id).is_none() {
        return StatusCode::NO_CONTENT.into_response();
    }

    store.put(report.clone());
    json_pretty(StatusCode::OK, &report)
}

#[utoipa::path(
    delete,
    path = "/api/v1/report/{id}",
    tag = "reports",
    params(("id" = String, Path, description = "Report identifier")),
    responses(
        (status = 204, description = "Report removed, or no report with this id")
    )
)]
pub async fn delete_report(State(store): State<ReportStore>, Path(id): Path<String>) -> Response {
    let removed = store.delete(&id);
    tracing::debug!("delete report {}: present={}", id, removed);

    // Absent and removed answer alike
    StatusCode::NO_CONTENT.into_response()
}

fn decode_report(body: &[u8]) -> Result<Report, Response> {
    serde_json::from_slice(body).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("request body invalid: {err}"),
        )
            .into_response()
    })
}

fn json_pretty<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to encode response: {err}"),
        )
            .into_response(),
    }
}
