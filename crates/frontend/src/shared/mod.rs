pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod saved_names;
pub mod storage;
