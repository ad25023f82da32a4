//! Monthly demand aggregation for a single product.

use std::collections::BTreeMap;

use common::{MonthlyPoint, MonthlySeries};
use model::calendar::month_from_index;
use model::table::{MONTH, ORDER_QUANTITY, PRODUCT_ID};
use model::SalesTable;
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// Sums order quantities per calendar month for `product_id`.
///
/// Rows without an order month are dropped. The returned points are
/// strictly increasing by month with one entry per month present in the
/// product's rows. A product with no such rows is invalid input.
#[instrument(skip(table))]
pub fn monthly_series(table: &SalesTable, product_id: &str) -> Result<MonthlySeries> {
    let grouped = table
        .frame()
        .clone()
        .lazy()
        .filter(col(PRODUCT_ID).eq(lit(product_id)).and(col(MONTH).is_not_null()))
        .group_by([col(MONTH)])
        .agg([col(ORDER_QUANTITY).sum()])
        .collect()?;

    let months = grouped.column(MONTH)?.as_materialized_series().i32()?;
    let quantities = grouped.column(ORDER_QUANTITY)?.as_materialized_series().i64()?;

    let mut by_month: BTreeMap<i32, i64> = BTreeMap::new();
    for (month, quantity) in months.into_iter().zip(quantities.into_iter()) {
        if let Some(month) = month {
            *by_month.entry(month).or_insert(0) += quantity.unwrap_or(0);
        }
    }

    let points = by_month
        .into_iter()
        .map(|(index, quantity)| {
            month_from_index(index)
                .map(|month| MonthlyPoint { month, quantity })
                .ok_or_else(|| ComputeError::DataFrame(format!("Invalid month index {}", index)))
        })
        .collect::<Result<Vec<_>>>()?;

    if points.is_empty() {
        return Err(ComputeError::InvalidData(format!(
            "Invalid data for Product {}",
            product_id
        )));
    }

    let series = MonthlySeries::new(product_id, points);
    debug!(months = series.len(), "Monthly sales: {:?}", series.points);
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, record, table};

    #[test]
    fn test_two_months_example() {
        let table = table(vec![
            record("A1", "05-01-2023", Some(100.0), 4),
            record("A1", "20-01-2023", Some(100.0), 6),
            record("A1", "11-02-2023", Some(100.0), 20),
            record("B2", "11-02-2023", Some(50.0), 99),
        ]);

        let series = monthly_series(&table, "A1").unwrap();
        assert_eq!(
            series.points,
            vec![
                MonthlyPoint { month: date(2023, 1, 1), quantity: 10 },
                MonthlyPoint { month: date(2023, 2, 1), quantity: 20 },
            ]
        );
    }

    #[test]
    fn test_months_strictly_increasing_regardless_of_row_order() {
        let table = table(vec![
            record("A1", "03-06-2023", Some(1.0), 1),
            record("A1", "03-12-2022", Some(1.0), 2),
            record("A1", "03-03-2023", Some(1.0), 3),
            record("A1", "28-03-2023", Some(1.0), 4),
        ]);

        let series = monthly_series(&table, "A1").unwrap();
        let months: Vec<_> = series.points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![date(2022, 12, 1), date(2023, 3, 1), date(2023, 6, 1)]);
        assert!(months.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.points[1].quantity, 7);
    }

    #[test]
    fn test_rows_without_order_date_are_dropped() {
        let table = table(vec![
            record("A1", "bad-date", Some(1.0), 50),
            record("A1", "10-04-2023", Some(1.0), 5),
        ]);

        let series = monthly_series(&table, "A1").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].quantity, 5);
    }

    #[test]
    fn test_unknown_product_is_invalid_data() {
        let table = table(vec![record("A1", "10-04-2023", Some(1.0), 5)]);

        match monthly_series(&table, "Z9") {
            Err(ComputeError::InvalidData(message)) => {
                assert_eq!(message, "Invalid data for Product Z9")
            }
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_product_with_only_undated_rows_is_invalid_data() {
        let table = table(vec![record("A1", "", Some(1.0), 5)]);
        assert!(matches!(
            monthly_series(&table, "A1"),
            Err(ComputeError::InvalidData(_))
        ));
    }
}
