pub mod a001_name;
pub mod a002_category;
pub mod u501_generate_names;
