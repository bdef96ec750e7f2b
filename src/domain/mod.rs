pub mod category;
pub mod offer;
pub mod types;
