use chrono::{Datelike, NaiveDate};

use crate::calendar;

/// One order line of the regional sales file.
///
/// Dates and numbers that could not be coerced are kept as `None` and
/// propagate into the aggregates as missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub product_id: String,
    pub order_date: Option<NaiveDate>,
    pub procured_date: Option<NaiveDate>,
    pub ship_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub unit_price: Option<f64>,
    pub order_quantity: Option<i64>,
    /// First day of the order month
    pub month: Option<NaiveDate>,
    pub year: Option<i32>,
}

impl SalesRecord {
    /// Builds a record and derives the month and year from the order date.
    pub fn new(
        product_id: impl Into<String>,
        order_date: Option<NaiveDate>,
        procured_date: Option<NaiveDate>,
        ship_date: Option<NaiveDate>,
        delivery_date: Option<NaiveDate>,
        unit_price: Option<f64>,
        order_quantity: Option<i64>,
    ) -> Self {
        let month = order_date.and_then(calendar::month_start);
        let year = month.map(|m| m.year());

        Self {
            product_id: product_id.into(),
            order_date,
            procured_date,
            ship_date,
            delivery_date,
            unit_price,
            order_quantity,
            month,
            year,
        }
    }

    /// Integer month key used for grouping
    pub fn month_index(&self) -> Option<i32> {
        self.month.map(calendar::month_index)
    }
}
