//! Builders for the sample sales tables used by the compute tests.

use chrono::{Months, NaiveDate};
use common::{MonthlyPoint, MonthlySeries};
use model::calendar::parse_day_first;
use model::{SalesRecord, SalesTable};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Order line with only the fields the computations read.
/// `order_date` is day-first text; unparseable text leaves the row undated.
pub fn record(product_id: &str, order_date: &str, price: Option<f64>, quantity: i64) -> SalesRecord {
    SalesRecord::new(
        product_id,
        parse_day_first(order_date),
        None,
        None,
        None,
        price,
        Some(quantity),
    )
}

pub fn table(records: Vec<SalesRecord>) -> SalesTable {
    SalesTable::from_records(records).expect("Failed to build sales table")
}

/// Two order lines per month for `count` consecutive months.
pub fn monthly_records(
    product_id: &str,
    year: i32,
    start_month: u32,
    count: u32,
    base_price: f64,
) -> Vec<SalesRecord> {
    let start = date(year, start_month, 1);
    (0..count)
        .flat_map(|k| {
            let month = start + Months::new(k);
            let early = month + chrono::Duration::days(4);
            let late = month + chrono::Duration::days(19);
            let quantity = 20 + ((k * 7) % 11) as i64;
            let price = base_price + k as f64;
            [
                SalesRecord::new(product_id, Some(early), None, None, None, Some(price), Some(quantity)),
                SalesRecord::new(product_id, Some(late), None, None, None, Some(price + 2.0), Some(5)),
            ]
        })
        .collect()
}

/// Monthly series with a trend and a seasonal swing.
pub fn seasonal_series(product_id: &str, start: NaiveDate, count: u32) -> MonthlySeries {
    let points = (0..count)
        .map(|k| MonthlyPoint {
            month: start + Months::new(k),
            quantity: 50 + k as i64 + ((k as f64 * 0.9).sin() * 10.0).round() as i64,
        })
        .collect();
    MonthlySeries::new(product_id, points)
}
