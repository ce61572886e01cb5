//! Wire rows of the managed backend's auto-generated REST surface.
//!
//! The store keys rows by numeric ids; the domain works with strings, so
//! every conversion stringifies the id.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::rates::WeeklyRateBucket;
use crate::domain::reservation::{IntervalKind, ReservedInterval};
use crate::domain::unit::RentalUnit;

#[derive(Debug, Deserialize)]
pub struct UnitRow {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub cleaning_fee: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UnitRow> for RentalUnit {
    fn from(row: UnitRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            capacity: row.capacity,
            cleaning_fee: row.cleaning_fee,
            description: row.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RateBucketRow {
    pub unit_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekly_price: f64,
    #[serde(default)]
    pub season: Option<String>,
}

impl From<RateBucketRow> for WeeklyRateBucket {
    fn from(row: RateBucketRow) -> Self {
        Self {
            unit_id: row.unit_id.to_string(),
            start: row.start_date,
            end: row.end_date,
            weekly_price: row.weekly_price,
            season: row.season,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReservationRow {
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

impl From<ReservationRow> for ReservedInterval {
    fn from(row: ReservationRow) -> Self {
        Self {
            start: row.arrival,
            end: row.departure,
            kind: IntervalKind::Booking,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DateBlockRow {
    /// `None` marks a block applying to every unit.
    #[serde(default)]
    pub unit_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<DateBlockRow> for ReservedInterval {
    fn from(row: DateBlockRow) -> Self {
        Self {
            start: row.start_date,
            end: row.end_date,
            kind: if row.unit_id.is_some() {
                IntervalKind::UnitBlock
            } else {
                IntervalKind::GlobalBlock
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InsertedRow {
    pub id: i64,
}
