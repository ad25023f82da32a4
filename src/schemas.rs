use std::sync::Arc;

use common::{
    DashboardFigures, DashboardLayout, Dropdown, Figure, ForecastPoint, ForecastSeries,
    ModelSummary, MonthlyPoint, MonthlySeries, PriceCell, PriceComparisonDto, ProductOption,
    Trace, TraceKind,
};
use compute::{DemandForecaster, PriceComparison};
use model::SalesTable;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Sales table loaded at start-up; read-only for the process lifetime
    pub table: Arc<SalesTable>,
    /// Model used for every demand forecast
    pub forecaster: Arc<dyn DemandForecaster>,
    /// Cache for expensive operations
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    PriceComparison(Arc<PriceComparison>),
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of loaded sales records
    pub records: usize,
    /// Number of distinct products
    pub products: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dashboard::get_dashboard_layout,
        crate::handlers::dashboard::get_product_dashboard,
        crate::handlers::products::get_products,
        crate::handlers::products::get_monthly_series,
        crate::handlers::products::get_forecast,
        crate::handlers::products::get_price_comparison,
    ),
    components(
        schemas(
            ApiResponse<DashboardLayout>,
            ApiResponse<DashboardFigures>,
            ApiResponse<Vec<ProductOption>>,
            ApiResponse<MonthlySeries>,
            ApiResponse<ForecastSeries>,
            ApiResponse<PriceComparisonDto>,
            ErrorResponse,
            HealthResponse,
            DashboardLayout,
            Dropdown,
            ProductOption,
            DashboardFigures,
            Figure,
            Trace,
            TraceKind,
            MonthlySeries,
            MonthlyPoint,
            ForecastSeries,
            ForecastPoint,
            ModelSummary,
            PriceComparisonDto,
            PriceCell,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard layout and chart endpoints"),
        (name = "products", description = "Per-product demand and price endpoints"),
    ),
    info(
        title = "Demandcast API",
        description = "Product demand forecasting (ARIMA) and price comparison over regional sales data",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
