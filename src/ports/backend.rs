use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::quote::{QuoteRequest, QuoteResult};
use crate::domain::rates::WeeklyRateBucket;
use crate::domain::reservation::ReservedInterval;
use crate::domain::unit::RentalUnit;
use crate::error::Result;

/// Read/write access to the managed booking backend. The engine only ever
/// reads through this port during a calculation; `save_quote_request` exists
/// for callers wishing to persist a finished quote.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn fetch_unit(&self, unit_id: &str) -> Result<RentalUnit>;

    /// Rate buckets for the unit across the given calendar years.
    async fn fetch_rate_buckets(
        &self,
        unit_id: &str,
        years: &[i32],
    ) -> Result<Vec<WeeklyRateBucket>>;

    /// Bookings and administrative blocks conflicting with the period.
    async fn fetch_conflicting_intervals(
        &self,
        unit_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<ReservedInterval>>;

    /// Persist a quote request with its computed result; returns the new id.
    async fn save_quote_request(
        &self,
        request: &QuoteRequest,
        result: &QuoteResult,
    ) -> Result<String>;
}
