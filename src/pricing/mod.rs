pub mod availability;
pub mod discount;
pub mod distribution;
pub mod engine;
pub mod rates;
pub mod rounding;
