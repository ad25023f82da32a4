use anyhow::Result;
use std::path::Path;

/// Prints one product identifier per line, in dropdown order.
pub fn list_products(data_path: &Path) -> Result<()> {
    let table = model::load_sales_table(data_path)?;
    for product_id in table.product_ids() {
        println!("{}", product_id);
    }
    Ok(())
}
