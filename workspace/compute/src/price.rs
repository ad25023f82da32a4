//! Cross-product price comparison.
//!
//! Average unit price per product and month over the whole sales table,
//! the average in the table's latest month ("current price") and the
//! row-wise mean of every populated value ("optimal price").

use std::collections::{BTreeMap, BTreeSet};

use common::{PriceCell, PriceComparisonDto};
use model::calendar::month_from_index;
use model::table::{MONTH, PRODUCT_ID, UNIT_PRICE};
use model::SalesTable;
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// One product's row of the comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct PriceComparisonRow {
    pub product_id: String,
    /// Average price per month index, one entry per month of the table
    pub monthly: BTreeMap<i32, Option<f64>>,
    pub current_price: Option<f64>,
    pub optimal_price: Option<f64>,
}

impl PriceComparisonRow {
    /// True when every month, the current price and the optimal price are known
    pub fn is_complete(&self) -> bool {
        self.monthly.values().all(Option::is_some)
            && self.current_price.is_some()
            && self.optimal_price.is_some()
    }

    pub fn to_dto(&self) -> Result<PriceComparisonDto> {
        let monthly = self
            .monthly
            .iter()
            .map(|(index, price)| {
                month_from_index(*index)
                    .map(|month| PriceCell { month, price: *price })
                    .ok_or_else(|| ComputeError::DataFrame(format!("Invalid month index {}", index)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PriceComparisonDto {
            product_id: self.product_id.clone(),
            monthly,
            current_price: self.current_price,
            optimal_price: self.optimal_price,
            complete: self.is_complete(),
        })
    }
}

/// Product × month average price table
#[derive(Debug, Clone, Default)]
pub struct PriceComparison {
    months: Vec<i32>,
    latest_month: Option<i32>,
    rows: BTreeMap<String, PriceComparisonRow>,
}

impl PriceComparison {
    /// Builds the table from every row of `table` that has an order month.
    #[instrument(skip(table))]
    pub fn from_table(table: &SalesTable) -> Result<Self> {
        let grouped = table
            .frame()
            .clone()
            .lazy()
            .filter(col(MONTH).is_not_null())
            .group_by([col(PRODUCT_ID), col(MONTH)])
            .agg([col(UNIT_PRICE).mean()])
            .collect()?;

        let products = grouped.column(PRODUCT_ID)?.as_materialized_series().str()?;
        let months = grouped.column(MONTH)?.as_materialized_series().i32()?;
        let prices = grouped.column(UNIT_PRICE)?.as_materialized_series().f64()?;

        let mut cells: BTreeMap<String, BTreeMap<i32, Option<f64>>> = BTreeMap::new();
        let mut month_set = BTreeSet::new();
        for ((product, month), price) in products.into_iter().zip(months).zip(prices) {
            let (Some(product), Some(month)) = (product, month) else {
                continue;
            };
            month_set.insert(month);
            cells
                .entry(product.to_string())
                .or_default()
                .insert(month, price.filter(|p| !p.is_nan()));
        }

        let months: Vec<i32> = month_set.into_iter().collect();
        let latest_month = months.last().copied();

        let rows = cells
            .into_iter()
            .map(|(product_id, known)| {
                let monthly: BTreeMap<i32, Option<f64>> = months
                    .iter()
                    .map(|m| (*m, known.get(m).copied().flatten()))
                    .collect();
                let current_price = latest_month.and_then(|m| monthly.get(&m).copied().flatten());
                let optimal_price = row_mean(monthly.values().copied().chain([current_price]));

                let row = PriceComparisonRow {
                    product_id: product_id.clone(),
                    monthly,
                    current_price,
                    optimal_price,
                };
                (product_id, row)
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            products = rows.len(),
            months = months.len(),
            "Price comparison table computed"
        );

        Ok(Self {
            months,
            latest_month,
            rows,
        })
    }

    pub fn row(&self, product_id: &str) -> Option<&PriceComparisonRow> {
        self.rows.get(product_id)
    }

    /// Month indices used as columns, ascending
    pub fn months(&self) -> &[i32] {
        &self.months
    }

    pub fn latest_month(&self) -> Option<i32> {
        self.latest_month
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Arithmetic mean of the populated values; `None` when nothing is populated.
fn row_mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
