pub mod aggregate;
pub mod browse;
pub mod query;
