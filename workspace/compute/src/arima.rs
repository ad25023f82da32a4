//! ARIMA(p, d, 0) demand model.
//!
//! The series is differenced `d` times, autoregressive coefficients are
//! estimated on the differenced series with the Yule-Walker equations
//! (solved by Levinson-Durbin recursion) and forecasts are integrated back
//! to the original scale.
//!
//! With `d > 0` the differenced model carries no constant; with `d == 0`
//! the series mean is used as the constant.
//!
//! ## Example
//!
//! ```rust
//! use compute::arima::{Arima, Predictor};
//!
//! let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
//! let mut model = Arima::new(5, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(12).unwrap();
//! assert_eq!(forecast.len(), 12);
//! ```

use common::ModelSummary;

use crate::error::{ComputeError, Result};

/// Variance below which a series is treated as constant
const EPSILON: f64 = 1e-10;

/// Common trait for time series predictors
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict future values
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// ARIMA model without moving-average terms
#[derive(Debug, Clone)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// AR coefficients, lag 1 first
    ar_coeffs: Vec<f64>,
    /// Mean of the differenced series (zero when d > 0)
    constant: f64,
    /// Residual variance of the conditional fit
    sigma2: f64,
    /// Demeaned differenced series
    centered: Vec<f64>,
    /// Last value of the series at each differencing level 0..d
    tails: Vec<f64>,
    /// Number of observations seen by `fit`
    observations: usize,
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with the given orders.
    ///
    /// Only `q == 0` is supported.
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if q != 0 {
            return Err(ComputeError::Forecast(format!(
                "moving-average order {} is not supported",
                q
            )));
        }
        if d > 2 {
            return Err(ComputeError::Forecast(
                "differencing order must be <= 2".to_string(),
            ));
        }

        Ok(Self {
            p,
            d,
            ar_coeffs: vec![0.0; p],
            constant: 0.0,
            sigma2: 0.0,
            centered: Vec::new(),
            tails: Vec::new(),
            observations: 0,
            fitted: false,
        })
    }

    /// Smallest series length the model can be fitted on
    pub fn min_observations(&self) -> usize {
        self.p + self.d + 1
    }

    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, 0)
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            p: self.p,
            d: self.d,
            q: 0,
            ar_coefficients: self.ar_coeffs.clone(),
            constant: self.constant,
            sigma2: self.sigma2,
            observations: self.observations,
        }
    }

    fn difference(data: &[f64]) -> Vec<f64> {
        data.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Biased sample autocovariances for lags 0..=max_lag
    fn autocovariances(series: &[f64], max_lag: usize) -> Vec<f64> {
        let n = series.len() as f64;
        (0..=max_lag)
            .map(|k| {
                series
                    .iter()
                    .skip(k)
                    .zip(series.iter())
                    .map(|(a, b)| a * b)
                    .sum::<f64>()
                    / n
            })
            .collect()
    }

    /// Solves the Yule-Walker equations by Levinson-Durbin recursion.
    fn yule_walker(series: &[f64], order: usize) -> Vec<f64> {
        let mut phi = vec![0.0; order];
        if order == 0 {
            return phi;
        }

        let r = Self::autocovariances(series, order);
        let mut error = r[0];
        if error <= EPSILON {
            return phi;
        }

        for k in 0..order {
            let mut acc = r[k + 1];
            for j in 0..k {
                acc -= phi[j] * r[k - j];
            }
            let reflection = acc / error;

            let previous = phi.clone();
            phi[k] = reflection;
            for j in 0..k {
                phi[j] = previous[j] - reflection * previous[k - 1 - j];
            }

            error *= 1.0 - reflection * reflection;
            if error <= EPSILON {
                break;
            }
        }

        phi
    }

    fn one_step(&self, history: &[f64]) -> f64 {
        self.ar_coeffs
            .iter()
            .enumerate()
            .map(|(j, phi)| phi * history[history.len() - 1 - j])
            .sum()
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let required = self.min_observations();
        if data.len() < required {
            return Err(ComputeError::Forecast(format!(
                "insufficient data: ARIMA({},{},0) needs at least {} observations, got {}",
                self.p,
                self.d,
                required,
                data.len()
            )));
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(ComputeError::Forecast(
                "data contains NaN or infinite values".to_string(),
            ));
        }

        let mut tails = Vec::with_capacity(self.d);
        let mut differenced = data.to_vec();
        for _ in 0..self.d {
            tails.push(differenced[differenced.len() - 1]);
            differenced = Self::difference(&differenced);
        }

        let constant = if self.d == 0 {
            differenced.iter().sum::<f64>() / differenced.len() as f64
        } else {
            0.0
        };
        let centered: Vec<f64> = differenced.iter().map(|x| x - constant).collect();

        self.ar_coeffs = Self::yule_walker(&centered, self.p);
        self.constant = constant;
        self.centered = centered;
        self.tails = tails;
        self.observations = data.len();

        let residuals: Vec<f64> = (self.p..self.centered.len())
            .map(|t| self.centered[t] - self.one_step(&self.centered[..t]))
            .collect();
        self.sigma2 = if residuals.is_empty() {
            0.0
        } else {
            residuals.iter().map(|e| e * e).sum::<f64>() / residuals.len() as f64
        };

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ComputeError::Forecast("model has not been fitted".to_string()));
        }

        let mut extended = self.centered.clone();
        let mut tails = self.tails.clone();
        let mut forecasts = Vec::with_capacity(steps);

        for _ in 0..steps {
            let next = self.one_step(&extended);
            extended.push(next);

            // Integrate from the innermost differencing level outwards
            let mut value = next + self.constant;
            for level in (0..self.d).rev() {
                tails[level] += value;
                value = tails[level];
            }
            forecasts.push(value);
        }

        if forecasts.iter().any(|x| !x.is_finite()) {
            return Err(ComputeError::Forecast(
                "forecast produced non-finite values".to_string(),
            ));
        }

        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
