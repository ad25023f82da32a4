use crate::handlers::{
    dashboard::{get_dashboard_layout, get_product_dashboard},
    health::health_check,
    products::{get_forecast, get_monthly_series, get_price_comparison, get_products},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::path::Path;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard shell and the selection callback
        .route("/api/v1/dashboard", get(get_dashboard_layout))
        .route("/api/v1/products/:product_id/dashboard", get(get_product_dashboard))
        // Per-product building blocks
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/products/:product_id/monthly", get(get_monthly_series))
        .route("/api/v1/products/:product_id/forecast", get(get_forecast))
        .route(
            "/api/v1/products/:product_id/price-comparison",
            get(get_price_comparison),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the built dashboard frontend for every path the API does not handle
pub fn with_static_assets(router: Router, static_dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}
