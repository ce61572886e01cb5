use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};

/// Inputs of one quote calculation. Constructed fresh per request and never
/// persisted by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub unit_ids: Vec<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// Children sharing a bed with an adult; they occupy no bed of their own.
    #[serde(default)]
    pub children_no_bed: u32,
    #[serde(default)]
    pub pet: bool,
    /// Which selected unit carries the pet, when the caller tracks it.
    #[serde(default)]
    pub pet_unit_id: Option<String>,
    #[serde(default)]
    pub linen_service: bool,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<()> {
        if self.unit_ids.is_empty() {
            return Err(QuoteError::InvalidParams {
                reason: "at least one unit must be selected".into(),
            });
        }
        for (i, id) in self.unit_ids.iter().enumerate() {
            if self.unit_ids[..i].contains(id) {
                return Err(QuoteError::InvalidParams {
                    reason: format!("unit {id} selected more than once"),
                });
            }
        }
        if self.check_out <= self.check_in {
            return Err(QuoteError::InvalidParams {
                reason: "check-out date must be after check-in date".into(),
            });
        }
        if self.children_no_bed > self.children {
            return Err(QuoteError::InvalidParams {
                reason: "children without a bed cannot exceed total children".into(),
            });
        }
        Ok(())
    }

    /// Paid nights of the stay; the checkout day itself is free.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Guests occupying a bed: adults plus children, minus children sharing
    /// a bed. Drives discounts and the linen fee.
    pub fn guests_in_beds(&self) -> u32 {
        self.adults + self.children - self.children_no_bed
    }

    /// Calendar years touched by the stay, for rate-table lookups.
    pub fn years_spanned(&self) -> Vec<i32> {
        (self.check_in.year()..=self.check_out.year()).collect()
    }
}

/// One unit's contribution to a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitQuoteLine {
    pub unit_id: String,
    pub unit_name: String,
    pub base_price: f64,
    pub occupied_beds: u32,
    pub capacity: u32,
    pub discount_percent: u32,
    pub discount_amount: f64,
    pub final_price: f64,
}

/// The aggregate quote. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResult {
    pub lines: Vec<UnitQuoteLine>,
    pub nights: i64,
    pub base_total: f64,
    /// Includes the residual lost to grid rounding, so that
    /// `base_total - discount_total + extras_total == final_total` exactly.
    pub discount_total: f64,
    pub extras_total: f64,
    pub final_total: f64,
    pub deposit: f64,
    pub balance: f64,
}

impl std::fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Quote for {} night(s)", self.nights)?;
        writeln!(
            f,
            "{:<20} {:>8} {:>6} {:>10} {:>8}",
            "Unit", "Base", "Beds", "Discount", "Final"
        )?;
        writeln!(f, "{}", "-".repeat(56))?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20} {:>8.0} {:>3}/{:<2} {:>4}% {:>4.0} {:>8.0}",
                line.unit_name,
                line.base_price,
                line.occupied_beds,
                line.capacity,
                line.discount_percent,
                line.discount_amount,
                line.final_price
            )?;
        }
        writeln!(f, "{}", "-".repeat(56))?;
        writeln!(f, "Base total:     {:>10.0}", self.base_total)?;
        writeln!(f, "Discount total: {:>10.0}", self.discount_total)?;
        writeln!(f, "Extras total:   {:>10.0}", self.extras_total)?;
        writeln!(f, "Final total:    {:>10.0}", self.final_total)?;
        writeln!(f, "Deposit:        {:>10.0}", self.deposit)?;
        write!(f, "Balance:        {:>10.0}", self.balance)
    }
}
