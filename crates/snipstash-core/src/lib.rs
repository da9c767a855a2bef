//! snipstash-core
//!
//! Pure domain types for the snippet store.
//! No driver or framework dependency — this is the shared vocabulary of the
//! snipstash system.

pub mod error;
pub mod models;

pub use error::CoreError;
