use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{ForecastSeries, MonthlySeries, PriceComparisonDto, ProductOption};
use compute::{forecast_series, monthly_series, ComputeError};
use tracing::{debug, instrument};

use crate::helpers::comparison::price_comparison;
use crate::helpers::errors::{compute_error_response, ApiError};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Distinct products in order of first appearance
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<Vec<ProductOption>>),
    )
)]
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<ProductOption>>> {
    let products: Vec<ProductOption> = state
        .table
        .product_ids()
        .into_iter()
        .map(ProductOption::new)
        .collect();
    debug!("Retrieved {} products", products.len());

    Json(ApiResponse {
        data: products,
        message: "Products retrieved successfully".to_string(),
        success: true,
    })
}

/// Monthly order quantities of a product
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/monthly",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Monthly series computed successfully", body = ApiResponse<MonthlySeries>),
        (status = 422, description = "No data for the product", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_series(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MonthlySeries>>, ApiError> {
    let series = monthly_series(&state.table, &product_id).map_err(compute_error_response)?;

    Ok(Json(ApiResponse {
        data: series,
        message: "Monthly series computed successfully".to_string(),
        success: true,
    }))
}

/// Twelve-month demand forecast of a product
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/forecast",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastSeries>),
        (status = 422, description = "No data for the product", body = ErrorResponse),
        (status = 500, description = "Forecast could not be computed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastSeries>>, ApiError> {
    let forecast = monthly_series(&state.table, &product_id)
        .and_then(|series| forecast_series(state.forecaster.as_ref(), &series))
        .map_err(compute_error_response)?;

    Ok(Json(ApiResponse {
        data: forecast,
        message: "Forecast computed successfully".to_string(),
        success: true,
    }))
}

/// Price comparison row of a product
#[utoipa::path(
    get,
    path = "/api/v1/products/{product_id}/price-comparison",
    tag = "products",
    params(
        ("product_id" = String, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Price comparison retrieved successfully", body = ApiResponse<PriceComparisonDto>),
        (status = 422, description = "No dated rows for the product", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_price_comparison(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PriceComparisonDto>>, ApiError> {
    let comparison = price_comparison(&state).await.map_err(compute_error_response)?;

    let row = comparison
        .row(&product_id)
        .ok_or_else(|| {
            ComputeError::InvalidData(format!("No price data for Product {}", product_id))
        })
        .and_then(|row| row.to_dto())
        .map_err(compute_error_response)?;

    Ok(Json(ApiResponse {
        data: row,
        message: "Price comparison retrieved successfully".to_string(),
        success: true,
    }))
}
