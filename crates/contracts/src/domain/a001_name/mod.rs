pub mod aggregate;
pub mod gender;
pub mod validation;
