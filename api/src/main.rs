use axum::Router;
use dotenvy::dotenv;
use report_registry_api::helpers::config::ServerConfig;
use report_registry_api::models::report::Report;
use report_registry_api::route::create_api_router;
use report_registry_api::services::report_store::ReportStore;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        report_registry_api::handlers::report_handler::create_report,
        report_registry_api::handlers::report_handler::fetch_report,
        report_registry_api::handlers::report_handler::list_reports,
        report_registry_api::handlers::report_handler::update_report,
        report_registry_api::handlers::report_handler::delete_report,
    ),
    components(schemas(Report)),
    info(title = "Report Registry API", version = "0.1.0")
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let store = ReportStore::with_capacity(config.report_capacity);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(create_api_router(store))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::new(config.request_timeout));

    println!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
