//! Demand forecasting and price comparison over the sales table.

pub mod arima;
pub mod dashboard;
pub mod error;
pub mod figures;
pub mod forecast;
pub mod monthly;
pub mod price;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

pub use dashboard::forecast_and_compare;
pub use error::{ComputeError, Result};
pub use forecast::{
    forecast_series, ArimaForecaster, DemandForecaster, DEFAULT_ORDER, FORECAST_HORIZON,
};
pub use monthly::monthly_series;
pub use price::{PriceComparison, PriceComparisonRow};

/// Returns the pre-configured forecaster used by the dashboard:
/// ARIMA(5,1,0) forecasting twelve months ahead.
pub fn default_forecaster() -> Arc<dyn DemandForecaster> {
    Arc::new(ArimaForecaster::new(DEFAULT_ORDER, FORECAST_HORIZON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::{date, seasonal_series};

    /// The default forecaster produces a year of monthly forecasts from a
    /// realistic two-and-a-half year history.
    #[test]
    fn test_default_forecaster_on_long_history() {
        let forecaster = default_forecaster();
        assert_eq!(forecaster.horizon(), FORECAST_HORIZON);

        let series = seasonal_series("A1", date(2018, 5, 1), 32);
        let forecast = forecast_series(forecaster.as_ref(), &series).unwrap();

        assert_eq!(forecast.points.len(), 12);
        assert_eq!(forecast.points[0].month, date(2021, 1, 1));
        assert_eq!(forecast.points[11].month, date(2021, 12, 1));
    }
}
