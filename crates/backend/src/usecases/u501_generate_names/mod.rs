pub mod executor;

pub use executor::{prepare, GenerateError, GenerateExecutor};
