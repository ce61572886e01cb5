use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::quote::{QuoteRequest, QuoteResult};
use crate::domain::rates::WeeklyRateBucket;
use crate::domain::reservation::ReservedInterval;
use crate::domain::unit::RentalUnit;
use crate::error::Result;
use crate::ports::backend::BookingBackend;
use crate::ports::cache::QuoteCache;

/// Memoizing wrapper around a `BookingBackend`. Read lookups are cached as
/// serialized JSON under deterministic keys built from the operation name and
/// its arguments, so repeated quote calculations within a session avoid
/// redundant backend round-trips. Only successful results are cached;
/// `save_quote_request` passes straight through.
pub struct CachedBackend {
    inner: Arc<dyn BookingBackend>,
    cache: Arc<dyn QuoteCache>,
    ttl: Duration,
}

impl CachedBackend {
    pub fn new(inner: Arc<dyn BookingBackend>, cache: Arc<dyn QuoteCache>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    fn cached<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn store<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Ok(serialized) = serde_json::to_string(value) {
            self.cache.set(key, &serialized, self.ttl);
        }
    }
}

#[async_trait]
impl BookingBackend for CachedBackend {
    async fn fetch_unit(&self, unit_id: &str) -> Result<RentalUnit> {
        let key = format!("unit:{unit_id}");
        if let Some(unit) = self.cached::<RentalUnit>(&key) {
            debug!(unit_id, "cache hit for unit");
            return Ok(unit);
        }
        let unit = self.inner.fetch_unit(unit_id).await?;
        self.store(&key, &unit);
        Ok(unit)
    }

    async fn fetch_rate_buckets(
        &self,
        unit_id: &str,
        years: &[i32],
    ) -> Result<Vec<WeeklyRateBucket>> {
        let year_part = years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        let key = format!("rates:{unit_id}:{year_part}");
        if let Some(buckets) = self.cached::<Vec<WeeklyRateBucket>>(&key) {
            debug!(unit_id, "cache hit for rate buckets");
            return Ok(buckets);
        }
        let buckets = self.inner.fetch_rate_buckets(unit_id, years).await?;
        self.store(&key, &buckets);
        Ok(buckets)
    }

    async fn fetch_conflicting_intervals(
        &self,
        unit_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<ReservedInterval>> {
        let key = format!("conflicts:{unit_id}:{check_in}:{check_out}");
        if let Some(intervals) = self.cached::<Vec<ReservedInterval>>(&key) {
            debug!(unit_id, "cache hit for conflicting intervals");
            return Ok(intervals);
        }
        let intervals = self
            .inner
            .fetch_conflicting_intervals(unit_id, check_in, check_out)
            .await?;
        self.store(&key, &intervals);
        Ok(intervals)
    }

    async fn save_quote_request(
        &self,
        request: &QuoteRequest,
        result: &QuoteResult,
    ) -> Result<String> {
        self.inner.save_quote_request(request, result).await
    }
}
