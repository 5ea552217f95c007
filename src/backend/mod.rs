//! APOD API access

pub mod api;
pub mod types;
