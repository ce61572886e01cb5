pub mod quote;
pub mod rates;
pub mod reservation;
pub mod unit;
