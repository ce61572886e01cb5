use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::quote::{QuoteRequest, QuoteResult};
use crate::domain::rates::WeeklyRateBucket;
use crate::domain::reservation::ReservedInterval;
use crate::domain::unit::RentalUnit;
use crate::error::Result;
use crate::ports::backend::BookingBackend;

type UnitFn = Box<dyn Fn(&str) -> Result<RentalUnit> + Send + Sync>;
type RatesFn = Box<dyn Fn(&str, &[i32]) -> Result<Vec<WeeklyRateBucket>> + Send + Sync>;
type ConflictsFn =
    Box<dyn Fn(&str, NaiveDate, NaiveDate) -> Result<Vec<ReservedInterval>> + Send + Sync>;
type SaveFn = Box<dyn Fn(&QuoteRequest, &QuoteResult) -> Result<String> + Send + Sync>;

pub struct MockBackend {
    unit_fn: Mutex<UnitFn>,
    rates_fn: Mutex<RatesFn>,
    conflicts_fn: Mutex<ConflictsFn>,
    save_fn: Mutex<SaveFn>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            unit_fn: Mutex::new(Box::new(|id| Ok(make_unit(id, 4)))),
            rates_fn: Mutex::new(Box::new(|_, _| Ok(vec![]))),
            conflicts_fn: Mutex::new(Box::new(|_, _, _| Ok(vec![]))),
            save_fn: Mutex::new(Box::new(|_, _| Ok("1".into()))),
        }
    }

    #[must_use]
    pub fn with_unit(
        self,
        f: impl Fn(&str) -> Result<RentalUnit> + Send + Sync + 'static,
    ) -> Self {
        *self.unit_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_rates(
        self,
        f: impl Fn(&str, &[i32]) -> Result<Vec<WeeklyRateBucket>> + Send + Sync + 'static,
    ) -> Self {
        *self.rates_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_conflicts(
        self,
        f: impl Fn(&str, NaiveDate, NaiveDate) -> Result<Vec<ReservedInterval>>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        *self.conflicts_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_save(
        self,
        f: impl Fn(&QuoteRequest, &QuoteResult) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        *self.save_fn.lock().unwrap() = Box::new(f);
        self
    }
}

#[async_trait]
impl BookingBackend for MockBackend {
    async fn fetch_unit(&self, unit_id: &str) -> Result<RentalUnit> {
        let f = self.unit_fn.lock().unwrap();
        f(unit_id)
    }

    async fn fetch_rate_buckets(
        &self,
        unit_id: &str,
        years: &[i32],
    ) -> Result<Vec<WeeklyRateBucket>> {
        let f = self.rates_fn.lock().unwrap();
        f(unit_id, years)
    }

    async fn fetch_conflicting_intervals(
        &self,
        unit_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<ReservedInterval>> {
        let f = self.conflicts_fn.lock().unwrap();
        f(unit_id, check_in, check_out)
    }

    async fn save_quote_request(
        &self,
        request: &QuoteRequest,
        result: &QuoteResult,
    ) -> Result<String> {
        let f = self.save_fn.lock().unwrap();
        f(request, result)
    }
}

// --- Factory functions ---

pub fn make_unit(id: &str, capacity: u32) -> RentalUnit {
    RentalUnit {
        id: id.to_string(),
        name: format!("Apartment {id}"),
        capacity,
        cleaning_fee: None,
        description: None,
    }
}

pub fn make_bucket(unit_id: &str, start: &str, end: &str, weekly_price: f64) -> WeeklyRateBucket {
    WeeklyRateBucket {
        unit_id: unit_id.to_string(),
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        weekly_price,
        season: None,
    }
}

pub fn make_request(unit_ids: &[&str], check_in: &str, check_out: &str, adults: u32) -> QuoteRequest {
    QuoteRequest {
        unit_ids: unit_ids.iter().map(ToString::to_string).collect(),
        check_in: check_in.parse().unwrap(),
        check_out: check_out.parse().unwrap(),
        adults,
        children: 0,
        children_no_bed: 0,
        pet: false,
        pet_unit_id: None,
        linen_service: false,
    }
}
