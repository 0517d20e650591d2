pub mod name_filter;
pub mod pagination;
pub mod request_sequencer;
pub mod saved_names;
