pub mod no_store;
pub mod request_log;
