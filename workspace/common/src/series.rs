use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summed order quantity for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlyPoint {
    /// First day of the month
    pub month: NaiveDate,
    /// Sum of order quantities in the month
    pub quantity: i64,
}

/// Monthly demand history of a single product, ordered by month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlySeries {
    pub product_id: String,
    pub points: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    pub fn new(product_id: impl Into<String>, points: Vec<MonthlyPoint>) -> Self {
        Self {
            product_id: product_id.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Month of the most recent observation
    pub fn last_month(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.month)
    }

    /// Quantities as model input
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.quantity as f64).collect()
    }
}

/// Point forecast for one future month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    pub month: NaiveDate,
    pub value: f64,
}

/// Fitted model parameters reported alongside a forecast
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModelSummary {
    /// Autoregressive order
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// Moving-average order
    pub q: usize,
    pub ar_coefficients: Vec<f64>,
    pub constant: f64,
    /// Residual variance of the fit
    pub sigma2: f64,
    /// Number of observations the model was fitted on
    pub observations: usize,
}

/// Forecast for the months following the last observed month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastSeries {
    pub product_id: String,
    pub points: Vec<ForecastPoint>,
    pub model: ModelSummary,
}

/// Average unit price of a product in one month; `None` when unknown
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceCell {
    pub month: NaiveDate,
    pub price: Option<f64>,
}

/// One row of the price comparison table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceComparisonDto {
    pub product_id: String,
    /// One cell per month present anywhere in the sales table
    pub monthly: Vec<PriceCell>,
    /// Average price in the latest month of the sales table
    pub current_price: Option<f64>,
    /// Mean of every populated monthly price and the current price
    pub optimal_price: Option<f64>,
    /// True when no value of the row is missing
    pub complete: bool,
}
