use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{DashboardFigures, DashboardLayout, Dropdown, ProductOption};
use compute::forecast_and_compare;
use tracing::{debug, info, instrument, trace};

use crate::helpers::comparison::price_comparison;
use crate::helpers::errors::{compute_error_response, ApiError};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

pub const DASHBOARD_TITLE: &str = "Product Demand Forecasting and Price Optimization(ARIMA)";
pub const PRODUCT_DROPDOWN_ID: &str = "product-dropdown";
pub const DEMAND_FORECAST_GRAPH_ID: &str = "demand-forecast";
pub const PRICE_COMPARISON_GRAPH_ID: &str = "price-comparison";

/// Static page layout: heading, product dropdown and the two chart panels
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard layout retrieved successfully", body = ApiResponse<DashboardLayout>),
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard_layout(State(state): State<AppState>) -> Json<ApiResponse<DashboardLayout>> {
    let options: Vec<ProductOption> = state
        .table
        .product_ids()
        .into_iter()
        .map(ProductOption::new)
        .collect();
    let value = options.first().map(|o| o.value.clone());
    debug!("Dashboard layout with {} product options", options.len());

    let layout = DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        dropdown: Dropdown {
            id: PRODUCT_DROPDOWN_ID.to_string(),
            options,
            value,
        },
        graphs: vec![
            DEMAND_FORECAST_GRAPH_ID.to_string(),
            PRICE_COMPARISON_GRAPH_ID.to_string(),
        ],
    };

    Json(ApiResponse {
        data: layout,
        message: "Dashboard layout retrieved successfully".to_string(),
        success: true,
    })
}

/// Both charts for the selected product: demand forecast and price comparison
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/dashboard",
    tag = "dashboard",
    params(
        ("product_id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Dashboard figures computed successfully", body = ApiResponse<DashboardFigures>),
        (status = 422, description = "No data for the product", body = ErrorResponse),
        (status = 500, description = "Forecast could not be computed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product_dashboard(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardFigures>>, ApiError> {
    trace!("Entering get_product_dashboard function");

    let comparison = price_comparison(&state).await.map_err(compute_error_response)?;
    let figures = forecast_and_compare(
        state.forecaster.as_ref(),
        &state.table,
        &comparison,
        &product_id,
    )
    .map_err(compute_error_response)?;

    info!(
        "Dashboard figures computed for product {} (price chart placeholder: {})",
        product_id,
        figures.price_comparison.is_placeholder()
    );

    Ok(Json(ApiResponse {
        data: figures,
        message: "Dashboard figures computed successfully".to_string(),
        success: true,
    }))
}
