use std::sync::Arc;

use futures::future;
use tracing::debug;

use crate::config::types::PricingConfig;
use crate::domain::quote::{QuoteRequest, QuoteResult, UnitQuoteLine};
use crate::domain::unit::RentalUnit;
use crate::error::{QuoteError, Result};
use crate::ports::backend::BookingBackend;
use crate::pricing::{availability, discount, distribution, rates, rounding};

/// The quote aggregator and sole public entry point of the pricing engine.
/// Availability is always fully resolved before any pricing work begins; a
/// quote for an unavailable unit is meaningless.
pub struct QuoteEngine {
    backend: Arc<dyn BookingBackend>,
    policy: PricingConfig,
}

impl QuoteEngine {
    pub fn new(backend: Arc<dyn BookingBackend>, policy: PricingConfig) -> Self {
        Self { backend, policy }
    }

    /// Produce a complete multi-unit quote, or fail without a partial result.
    pub async fn calculate_quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        request.validate()?;

        self.check_availability(request).await?;

        // Unit metadata and base prices are mutually independent per unit;
        // fire all fetches at once so latency stays near one round-trip.
        let units = future::try_join_all(
            request
                .unit_ids
                .iter()
                .map(|id| self.backend.fetch_unit(id)),
        )
        .await?;
        let base_prices = future::try_join_all(
            request
                .unit_ids
                .iter()
                .map(|id| self.base_price(id, request)),
        )
        .await?;

        let total_capacity: u32 = units.iter().map(|u| u.capacity).sum();
        let guests_in_beds = request.guests_in_beds();

        let mut lines = Vec::with_capacity(units.len());
        let mut base_total = 0.0;
        let mut discount_total = 0.0;
        for (unit, base_price) in units.iter().zip(base_prices) {
            let line = price_line(unit, base_price, guests_in_beds, total_capacity);
            base_total += line.base_price;
            discount_total += line.discount_amount;
            lines.push(line);
        }

        let extras_total = self.extras_total(request, guests_in_beds);
        let subtotal = base_total - discount_total + extras_total;
        let final_total = rounding::round_down_to_step(subtotal, self.policy.rounding_step);
        // Fold the rounding residual into the reported discount so the
        // displayed arithmetic reconciles exactly against the rounded total.
        let discount_total = base_total + extras_total - final_total;

        let deposit = rounding::round_down_to_step(
            final_total * self.policy.deposit_percent,
            self.policy.rounding_step,
        );
        let balance = final_total - deposit;

        debug!(
            units = lines.len(),
            base_total, final_total, deposit, "quote calculated"
        );

        Ok(QuoteResult {
            lines,
            nights: request.nights(),
            base_total,
            discount_total,
            extras_total,
            final_total,
            deposit,
            balance,
        })
    }

    /// Check every selected unit concurrently; reject with the full list of
    /// offending units before any pricing work starts.
    async fn check_availability(&self, request: &QuoteRequest) -> Result<()> {
        let checks = request.unit_ids.iter().map(|id| {
            availability::is_available(
                self.backend.as_ref(),
                id,
                request.check_in,
                request.check_out,
            )
        });
        let free = future::join_all(checks).await;

        let unavailable: Vec<String> = request
            .unit_ids
            .iter()
            .zip(free)
            .filter(|(_, free)| !*free)
            .map(|(id, _)| id.clone())
            .collect();
        if unavailable.is_empty() {
            Ok(())
        } else {
            Err(QuoteError::UnitUnavailable {
                unit_ids: unavailable,
            })
        }
    }

    async fn base_price(&self, unit_id: &str, request: &QuoteRequest) -> Result<f64> {
        let buckets = self
            .backend
            .fetch_rate_buckets(unit_id, &request.years_spanned())
            .await?;
        rates::price_for_period(unit_id, &buckets, request.check_in, request.check_out)
    }

    fn extras_total(&self, request: &QuoteRequest, guests_in_beds: u32) -> f64 {
        let mut extras = 0.0;
        if request.pet {
            // Flat fee regardless of pet count; see DESIGN.md.
            extras += self.policy.pet_fee;
        }
        if request.linen_service {
            extras += f64::from(guests_in_beds) * self.policy.linen_fee_per_guest;
        }
        extras
    }
}

fn price_line(
    unit: &RentalUnit,
    base_price: f64,
    guests_in_beds: u32,
    total_capacity: u32,
) -> UnitQuoteLine {
    let occupied_beds = distribution::occupied_beds(guests_in_beds, unit.capacity, total_capacity);
    let discount_percent = discount::discount_percent(occupied_beds, unit.capacity);
    let discount_amount = base_price * f64::from(discount_percent) / 100.0;
    UnitQuoteLine {
        unit_id: unit.id.clone(),
        unit_name: unit.name.clone(),
        base_price,
        occupied_beds,
        capacity: unit.capacity,
        discount_percent,
        discount_amount,
        final_price: base_price - discount_amount,
    }
}
