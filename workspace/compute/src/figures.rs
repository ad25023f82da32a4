//! Chart descriptions for the two dashboard panels.

use common::{Figure, ForecastSeries, Trace, TraceKind};
use model::calendar::month_from_index;

use crate::price::PriceComparisonRow;

pub const CURRENT_PRICE_LABEL: &str = "Current Price";
pub const OPTIMAL_PRICE_LABEL: &str = "Optimal Price";

/// Line chart of the forecast values against their months
pub fn demand_forecast_figure(forecast: &ForecastSeries) -> Figure {
    let x = forecast.points.iter().map(|p| p.month.to_string()).collect();
    let y = forecast.points.iter().map(|p| p.value).collect();

    Figure::new(
        format!("Demand Forecast for Product {}", forecast.product_id),
        vec![Trace {
            kind: TraceKind::Line,
            name: "Forecast".to_string(),
            x,
            y,
        }],
    )
}

/// Bar chart of a complete comparison row, otherwise the placeholder.
///
/// A row with any missing value is never drawn partially.
pub fn price_comparison_figure(product_id: &str, row: Option<&PriceComparisonRow>) -> Figure {
    match row.and_then(complete_bars) {
        Some((x, y)) => Figure::new(
            format!("Price Comparison for Product {}", product_id),
            vec![Trace {
                kind: TraceKind::Bar,
                name: product_id.to_string(),
                x,
                y,
            }],
        ),
        None => placeholder_figure(product_id),
    }
}

pub fn placeholder_figure(product_id: &str) -> Figure {
    Figure::placeholder(format!(
        "Not enough data to compare prices for Product {}",
        product_id
    ))
}

fn complete_bars(row: &PriceComparisonRow) -> Option<(Vec<String>, Vec<f64>)> {
    if !row.is_complete() {
        return None;
    }

    let mut x = Vec::with_capacity(row.monthly.len() + 2);
    let mut y = Vec::with_capacity(row.monthly.len() + 2);
    for (index, price) in &row.monthly {
        x.push(month_from_index(*index)?.to_string());
        y.push((*price)?);
    }
    x.push(CURRENT_PRICE_LABEL.to_string());
    y.push(row.current_price?);
    x.push(OPTIMAL_PRICE_LABEL.to_string());
    y.push(row.optimal_price?);

    Some((x, y))
}
