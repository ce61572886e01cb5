use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::reservation::ReservedInterval;
use crate::ports::backend::BookingBackend;

/// Whether any existing commitment collides with `[check_in, check_out)`
/// under the half-open overlap test. Back-to-back stays are compatible.
pub fn has_conflict(
    intervals: &[ReservedInterval],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    intervals.iter().any(|i| i.overlaps(check_in, check_out))
}

/// Check one unit against existing reservations and administrative blocks.
///
/// FAIL-OPEN ON QUERY ERROR: when the backend lookup itself fails (a query
/// error, not "no conflicts found"), the unit is reported as available rather
/// than blocking the user on a transient outage. This is a deliberate product
/// decision inherited from the booking site, not an oversight; it trades a
/// small double-booking risk during sustained outages for never turning
/// bookable dates away by mistake.
pub async fn is_available(
    backend: &dyn BookingBackend,
    unit_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    match backend
        .fetch_conflicting_intervals(unit_id, check_in, check_out)
        .await
    {
        Ok(intervals) => {
            let free = !has_conflict(&intervals, check_in, check_out);
            debug!(unit_id, %check_in, %check_out, free, "availability checked");
            free
        }
        Err(e) => {
            warn!(
                unit_id,
                error = %e,
                "availability query failed, assuming available (fail-open)"
            );
            true
        }
    }
}
