pub mod comparison;
pub mod errors;
