pub mod a001_name;
pub mod a002_category;
pub mod common;
