use std::collections::HashSet;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::calendar;
use crate::error::Result;
use crate::record::SalesRecord;

/// Column names of the sales `DataFrame`
pub const PRODUCT_ID: &str = "product_id";
pub const MONTH: &str = "month";
pub const YEAR: &str = "year";
pub const UNIT_PRICE: &str = "unit_price";
pub const ORDER_QUANTITY: &str = "order_quantity";

/// Immutable, process-wide sales table.
///
/// Keeps the coerced records alongside a polars `DataFrame` with the
/// columns used for aggregation:
/// - `product_id`: String
/// - `month`: i32 month index (see [`calendar::month_index`]), null when the order date is missing
/// - `year`: i32
/// - `unit_price`: f64
/// - `order_quantity`: i64
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
    frame: DataFrame,
}

impl SalesTable {
    pub fn from_records(records: Vec<SalesRecord>) -> Result<Self> {
        let product_ids: Vec<String> = records.iter().map(|r| r.product_id.clone()).collect();
        let months: Vec<Option<i32>> = records.iter().map(|r| r.month_index()).collect();
        let years: Vec<Option<i32>> = records.iter().map(|r| r.year).collect();
        let prices: Vec<Option<f64>> = records.iter().map(|r| r.unit_price).collect();
        let quantities: Vec<Option<i64>> = records.iter().map(|r| r.order_quantity).collect();

        let frame = DataFrame::new(vec![
            Series::new(PRODUCT_ID.into(), product_ids).into(),
            Series::new(MONTH.into(), months).into(),
            Series::new(YEAR.into(), years).into(),
            Series::new(UNIT_PRICE.into(), prices).into(),
            Series::new(ORDER_QUANTITY.into(), quantities).into(),
        ])?;

        Ok(Self { records, frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct product identifiers in order of first appearance
    pub fn product_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.product_id.as_str()))
            .map(|r| r.product_id.clone())
            .collect()
    }

    /// Month index of the most recent order month in the table
    pub fn latest_month_index(&self) -> Option<i32> {
        self.records.iter().filter_map(|r| r.month_index()).max()
    }

    /// First day of the most recent order month in the table
    pub fn latest_month(&self) -> Option<NaiveDate> {
        self.latest_month_index().and_then(calendar::month_from_index)
    }
}
