//! Demand forecasting on top of a monthly series.

use chrono::Months;
use common::{ForecastPoint, ForecastSeries, ModelSummary, MonthlySeries};
use tracing::{debug, instrument};

use crate::arima::{Arima, Predictor};
use crate::error::{ComputeError, Result};

/// Model order used by the dashboard: ARIMA(5,1,0)
pub const DEFAULT_ORDER: (usize, usize, usize) = (5, 1, 0);

/// Number of months forecast beyond the last observation
pub const FORECAST_HORIZON: usize = 12;

/// Produces point forecasts from a history of monthly values.
pub trait DemandForecaster: std::fmt::Debug + Send + Sync {
    /// Number of future periods produced by [`DemandForecaster::forecast`]
    fn horizon(&self) -> usize;

    /// Fits a fresh model on `history` and forecasts `horizon()` steps.
    fn forecast(&self, history: &[f64]) -> Result<(Vec<f64>, ModelSummary)>;
}

/// Fixed-order ARIMA forecaster; every call fits a new model.
#[derive(Debug, Clone)]
pub struct ArimaForecaster {
    order: (usize, usize, usize),
    horizon: usize,
}

impl ArimaForecaster {
    pub fn new(order: (usize, usize, usize), horizon: usize) -> Self {
        Self { order, horizon }
    }

    pub fn order(&self) -> (usize, usize, usize) {
        self.order
    }
}

impl DemandForecaster for ArimaForecaster {
    fn horizon(&self) -> usize {
        self.horizon
    }

    fn forecast(&self, history: &[f64]) -> Result<(Vec<f64>, ModelSummary)> {
        let (p, d, q) = self.order;
        let mut model = Arima::new(p, d, q)?;
        model.fit(history)?;
        let values = model.predict(self.horizon)?;
        Ok((values, model.summary()))
    }
}

/// Forecasts the months following the last observed month of `series`.
///
/// Forecast dates are the first days of the `horizon()` consecutive months
/// after the last observation.
#[instrument(skip(forecaster, series), fields(product_id = %series.product_id))]
pub fn forecast_series(
    forecaster: &dyn DemandForecaster,
    series: &MonthlySeries,
) -> Result<ForecastSeries> {
    let last_month = series.last_month().ok_or_else(|| {
        ComputeError::InvalidData(format!("Invalid data for Product {}", series.product_id))
    })?;

    let (values, model) = forecaster.forecast(&series.values())?;

    let points = values
        .into_iter()
        .enumerate()
        .map(|(step, value)| {
            last_month
                .checked_add_months(Months::new(step as u32 + 1))
                .map(|month| ForecastPoint { month, value })
                .ok_or_else(|| ComputeError::Forecast("forecast date out of range".to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        steps = points.len(),
        ar_coefficients = ?model.ar_coefficients,
        "Demand forecast computed"
    );

    Ok(ForecastSeries {
        product_id: series.product_id.clone(),
        points,
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, seasonal_series};
    use common::MonthlyPoint;

    fn default() -> ArimaForecaster {
        ArimaForecaster::new(DEFAULT_ORDER, FORECAST_HORIZON)
    }

    #[test]
    fn test_forecast_has_twelve_consecutive_months_after_last_observation() {
        let series = seasonal_series("A1", date(2022, 3, 1), 18);
        let last = series.last_month().unwrap();

        let forecast = forecast_series(&default(), &series).unwrap();
        assert_eq!(forecast.points.len(), 12);
        assert_eq!(forecast.product_id, "A1");

        let months: Vec<_> = forecast.points.iter().map(|p| p.month).collect();
        assert_eq!(months[0], date(2023, 9, 1));
        assert!(months[0] > last);
        for (k, month) in months.iter().enumerate() {
            assert_eq!(*month, last.checked_add_months(Months::new(k as u32 + 1)).unwrap());
        }
        assert_eq!(months[11], date(2024, 8, 1));
        assert!(forecast.points.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_forecast_reports_model_summary() {
        let series = seasonal_series("A1", date(2021, 1, 1), 24);
        let forecast = forecast_series(&default(), &series).unwrap();

        assert_eq!((forecast.model.p, forecast.model.d, forecast.model.q), (5, 1, 0));
        assert_eq!(forecast.model.observations, 24);
    }

    #[test]
    fn test_short_series_fails_to_fit() {
        let series = MonthlySeries::new(
            "A1",
            vec![
                MonthlyPoint { month: date(2023, 1, 1), quantity: 10 },
                MonthlyPoint { month: date(2023, 2, 1), quantity: 20 },
            ],
        );

        assert!(matches!(
            forecast_series(&default(), &series),
            Err(ComputeError::Forecast(_))
        ));
    }

    #[test]
    fn test_empty_series_is_invalid_data() {
        let series = MonthlySeries::new("A1", Vec::new());
        assert!(matches!(
            forecast_series(&default(), &series),
            Err(ComputeError::InvalidData(_))
        ));
    }

    #[test]
    fn test_horizon_follows_forecaster() {
        let forecaster = ArimaForecaster::new((1, 1, 0), 3);
        let series = seasonal_series("B2", date(2023, 1, 1), 10);

        let forecast = forecast_series(&forecaster, &series).unwrap();
        assert_eq!(forecast.points.len(), 3);
        assert_eq!(forecaster.order(), (1, 1, 0));
    }
}
