//! CSV ingestion for the regional sales file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::calendar::parse_day_first;
use crate::error::{ModelError, Result};
use crate::record::SalesRecord;
use crate::table::SalesTable;

pub const PRODUCT_ID_COLUMN: &str = "_ProductID";
pub const ORDER_DATE_COLUMN: &str = "OrderDate";
pub const PROCURED_DATE_COLUMN: &str = "ProcuredDate";
pub const SHIP_DATE_COLUMN: &str = "ShipDate";
pub const DELIVERY_DATE_COLUMN: &str = "DeliveryDate";
pub const UNIT_PRICE_COLUMN: &str = "Unit Price";
pub const ORDER_QUANTITY_COLUMN: &str = "Order Quantity";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 7] = [
    PRODUCT_ID_COLUMN,
    ORDER_DATE_COLUMN,
    PROCURED_DATE_COLUMN,
    SHIP_DATE_COLUMN,
    DELIVERY_DATE_COLUMN,
    UNIT_PRICE_COLUMN,
    ORDER_QUANTITY_COLUMN,
];

/// Raw row as it appears in the file; every cell is kept as text until coerced.
#[derive(Debug, Deserialize)]
struct RawSalesRow {
    #[serde(rename = "_ProductID")]
    product_id: String,
    #[serde(rename = "OrderDate")]
    order_date: String,
    #[serde(rename = "ProcuredDate")]
    procured_date: String,
    #[serde(rename = "ShipDate")]
    ship_date: String,
    #[serde(rename = "DeliveryDate")]
    delivery_date: String,
    #[serde(rename = "Unit Price")]
    unit_price: String,
    #[serde(rename = "Order Quantity")]
    order_quantity: String,
}

/// Loads the sales file at `path` into an in-memory table.
///
/// Any I/O, structural or numeric error aborts the load; there is no
/// partial table.
#[instrument]
pub fn load_sales_table(path: &Path) -> Result<SalesTable> {
    info!("Loading sales data from {}", path.display());

    let file = File::open(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_sales_records(BufReader::new(file))?;
    let table = SalesTable::from_records(records)?;

    info!(
        records = table.len(),
        products = table.product_ids().len(),
        "Sales data loaded"
    );
    Ok(table)
}

/// Reads and coerces every row of a sales CSV.
pub fn read_sales_records<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ModelError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawSalesRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = result?;
        records.push(coerce_row(row, line)?);
    }

    debug!("Read {} sales records", records.len());
    Ok(records)
}

fn coerce_row(row: RawSalesRow, line: usize) -> Result<SalesRecord> {
    let unit_price = parse_price(&row.unit_price).map_err(|value| ModelError::InvalidNumber {
        line,
        column: UNIT_PRICE_COLUMN,
        value,
    })?;
    let order_quantity =
        parse_quantity(&row.order_quantity).map_err(|value| ModelError::InvalidNumber {
            line,
            column: ORDER_QUANTITY_COLUMN,
            value,
        })?;

    Ok(SalesRecord::new(
        row.product_id.trim(),
        parse_day_first(&row.order_date),
        parse_day_first(&row.procured_date),
        parse_day_first(&row.ship_date),
        parse_day_first(&row.delivery_date),
        unit_price,
        order_quantity,
    ))
}

/// Parses a price such as `"1,963.10"`. Empty cells are missing values.
pub fn parse_price(value: &str) -> std::result::Result<Option<f64>, String> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<f64>() {
        Ok(price) if price.is_nan() => Ok(None),
        Ok(price) => Ok(Some(price)),
        Err(_) => Err(value.to_string()),
    }
}

/// Parses an order quantity. Integral floats such as `"4.0"` are accepted.
pub fn parse_quantity(value: &str) -> std::result::Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(quantity) = value.parse::<i64>() {
        return Ok(Some(quantity));
    }
    match value.parse::<f64>() {
        Ok(quantity) if quantity.is_nan() => Ok(None),
        Ok(quantity) if quantity.fract() == 0.0 && quantity.is_finite() => Ok(Some(quantity as i64)),
        _ => Err(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "OrderNumber,_ProductID,OrderDate,ProcuredDate,ShipDate,DeliveryDate,Unit Price,Order Quantity";

    #[test]
    fn test_parse_price_strips_thousands_separators() {
        assert_eq!(parse_price("1,963.10"), Ok(Some(1963.10)));
        assert_eq!(parse_price("12,345,678"), Ok(Some(12_345_678.0)));
        assert_eq!(parse_price("  "), Ok(None));
        assert_eq!(parse_price("n/a"), Err("n/a".to_string()));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), Ok(Some(5)));
        assert_eq!(parse_quantity("4.0"), Ok(Some(4)));
        assert_eq!(parse_quantity(""), Ok(None));
        assert!(parse_quantity("4.5").is_err());
        assert!(parse_quantity("many").is_err());
    }

    #[test]
    fn test_read_records_coerces_bad_dates_to_missing() {
        let csv = format!(
            "{HEADER}\n\
             SO-001,12,31-05-2018,31-12-2017,14-06-2018,19-06-2018,\"1,963.10\",5\n\
             SO-002,12,not-a-date,31-12-2017,,19-06-2018,\"3,939.60\",3\n"
        );

        let records = read_sales_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.product_id, "12");
        assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2018, 5, 31));
        assert_eq!(first.month, NaiveDate::from_ymd_opt(2018, 5, 1));
        assert_eq!(first.year, Some(2018));
        assert_eq!(first.unit_price, Some(1963.10));
        assert_eq!(first.order_quantity, Some(5));

        let second = &records[1];
        assert_eq!(second.order_date, None);
        assert_eq!(second.month, None);
        assert_eq!(second.year, None);
        assert_eq!(second.ship_date, None);
        assert_eq!(second.unit_price, Some(3939.60));
    }

    #[test]
    fn test_read_records_rejects_unparseable_price() {
        let csv = format!("{HEADER}\nSO-001,12,31-05-2018,31-12-2017,14-06-2018,19-06-2018,cheap,5\n");

        match read_sales_records(csv.as_bytes()) {
            Err(ModelError::InvalidNumber { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, UNIT_PRICE_COLUMN);
                assert_eq!(value, "cheap");
            }
            other => panic!("Expected InvalidNumber error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_records_requires_columns() {
        let csv = "_ProductID,OrderDate\n12,31-05-2018\n";
        match read_sales_records(csv.as_bytes()) {
            Err(ModelError::MissingColumn(column)) => assert_eq!(column, PROCURED_DATE_COLUMN),
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sales_table_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "SO-001,7,01-01-2023,20-12-2022,05-01-2023,09-01-2023,\"1,000.00\",10").unwrap();
        writeln!(file, "SO-002,3,15-02-2023,20-12-2022,20-02-2023,25-02-2023,250.50,2").unwrap();
        writeln!(file, "SO-003,7,03-02-2023,20-12-2022,05-02-2023,09-02-2023,\"1,100.00\",20").unwrap();

        let table = load_sales_table(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.product_ids(), vec!["7".to_string(), "3".to_string()]);
        assert_eq!(table.latest_month(), NaiveDate::from_ymd_opt(2023, 2, 1));
    }

    #[test]
    fn test_load_sales_table_missing_file() {
        let result = load_sales_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ModelError::Io { .. })));
    }
}
