pub mod repository;
pub mod sample_data;
pub mod service;
