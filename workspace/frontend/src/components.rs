pub mod chart;
pub mod dashboard;
