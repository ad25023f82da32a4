//! The forecast-and-compare routine run on every product selection.

use common::DashboardFigures;
use model::SalesTable;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::figures::{demand_forecast_figure, price_comparison_figure};
use crate::forecast::{forecast_series, DemandForecaster};
use crate::monthly::monthly_series;
use crate::price::PriceComparison;

/// Computes both dashboard charts for `product_id`.
///
/// Fails with `InvalidData` when the product has no dated rows and with
/// `Forecast` when the model cannot be fitted. Missing price data never
/// fails; it yields the placeholder chart.
#[instrument(skip(forecaster, table, comparison))]
pub fn forecast_and_compare(
    forecaster: &dyn DemandForecaster,
    table: &SalesTable,
    comparison: &PriceComparison,
    product_id: &str,
) -> Result<DashboardFigures> {
    debug!("Selected product {}", product_id);

    let monthly = monthly_series(table, product_id)?;
    let forecast = forecast_series(forecaster, &monthly)?;

    Ok(DashboardFigures {
        product_id: product_id.to_string(),
        demand_forecast: demand_forecast_figure(&forecast),
        price_comparison: price_comparison_figure(product_id, comparison.row(product_id)),
    })
}
