pub mod color;
pub mod dashboard;
pub mod products;
pub mod sales;
