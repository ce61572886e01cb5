use chrono::NaiveDate;

use crate::domain::rates::WeeklyRateBucket;
use crate::error::{QuoteError, Result};

/// Sum the nightly-equivalent price of a stay from the unit's weekly rate
/// buckets. Every night in `[check_in, check_out)` must fall inside a bucket;
/// each contributes one seventh of that bucket's weekly price. The checkout
/// date itself is not a paid night. The sum is rounded to the nearest whole
/// currency unit at the end.
///
/// A night with no covering bucket is an administrative pricing-calendar gap
/// and fails with `PricingDataMissing`; a default price is never substituted.
pub fn price_for_period(
    unit_id: &str,
    buckets: &[WeeklyRateBucket],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<f64> {
    if check_out <= check_in {
        return Err(QuoteError::InvalidParams {
            reason: "check-out date must be after check-in date".into(),
        });
    }

    let mut total = 0.0;
    let mut night = check_in;
    while night < check_out {
        let bucket = buckets.iter().find(|b| b.contains(night)).ok_or_else(|| {
            QuoteError::PricingDataMissing {
                unit_id: unit_id.to_string(),
                check_in,
                check_out,
            }
        })?;
        total += bucket.nightly_price();
        night += chrono::Duration::days(1);
    }

    Ok(total.round())
}
