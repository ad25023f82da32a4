pub mod forecast;
pub mod products;
pub mod serve;

pub use forecast::forecast;
pub use products::list_products;
pub use serve::serve;
