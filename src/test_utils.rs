#[cfg(test)]
pub mod test_utils {
    use crate::config::app_state_from_table;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    const HEADER: &str =
        "OrderNumber,Sales Channel,_ProductID,OrderDate,ProcuredDate,ShipDate,DeliveryDate,Unit Price,Order Quantity";

    /// Product with ten consecutive months (Jan-Oct 2023) and a price every month
    pub const FULL_PRODUCT: &str = "A1";
    /// Product with three months of sales; too short for an ARIMA(5,1,0) fit
    pub const SHORT_PRODUCT: &str = "B2";
    /// Product with eight months of sales; gaps in the price table
    pub const SPARSE_PRODUCT: &str = "C3";

    /// Renders the fixture sales file.
    ///
    /// Products appear in the order A1, B2, C3. The table spans Jan-Oct 2023.
    pub fn sample_sales_csv() -> String {
        let mut lines = vec![HEADER.to_string()];
        let mut order = 1;
        let mut push = |product: &str, day: u32, month: u32, price: &str, quantity: i64| {
            lines.push(format!(
                "SO-{order:05},In-Store,{product},{day:02}-{month:02}-2023,01-01-2023,{day:02}-{month:02}-2023,{day:02}-{month:02}-2023,{price},{quantity}"
            ));
            order += 1;
        };

        let a1_quantities = [5, 8, 6, 9, 7, 11, 8, 12, 10, 13];
        for (i, quantity) in a1_quantities.iter().enumerate() {
            let month = i as u32 + 1;
            // Two orders per month; the first price carries a thousands separator
            push(FULL_PRODUCT, 3, month, "\"1,200.50\"", *quantity);
            push(FULL_PRODUCT, 17, month, &format!("{}.50", 1000 + 10 * month), 2);
        }

        for month in [2, 3, 4] {
            push(SHORT_PRODUCT, 10, month, "310.00", 4);
        }

        for month in [1, 2, 3, 5, 6, 8, 9, 10] {
            push(SPARSE_PRODUCT, 20, month, "75.25", month as i64);
        }
        // Unparseable dates drop out of every monthly aggregate
        push(SPARSE_PRODUCT, 0, 0, "80.00", 100);

        lines.join("\n") + "\n"
    }

    /// Create AppState for testing from the fixture sales file
    pub fn setup_test_app_state() -> AppState {
        app_state_from_csv(&sample_sales_csv())
    }

    /// Create AppState from arbitrary sales file contents
    pub fn app_state_from_csv(contents: &str) -> AppState {
        let mut file = NamedTempFile::new().expect("Failed to create temp sales file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp sales file");

        let table = model::load_sales_table(file.path()).expect("Failed to load fixture sales file");
        app_state_from_table(table)
    }

    /// Sales file header followed by `rows`
    pub fn sales_csv(rows: &[String]) -> String {
        let mut lines = vec![HEADER.to_string()];
        lines.extend(rows.iter().cloned());
        lines.join("\n") + "\n"
    }

    /// Install the test tracing subscriber with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. The subscriber is global and installed
    /// once per test binary; later calls are no-ops.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        // Another test may already have installed it
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// Create axum app for testing over arbitrary sales file contents
    pub fn setup_test_app_with_csv(contents: &str) -> Router {
        init_test_tracing();
        create_router(app_state_from_csv(contents))
    }
}
