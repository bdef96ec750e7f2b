//! Diesel row types and their conversions into domain values.

pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod offer;
