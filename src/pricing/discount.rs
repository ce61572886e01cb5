#![allow(clippy::cast_precision_loss)]

/// Occupancy-ratio thresholds and their discount percents, evaluated
/// high-to-low with first match winning. Full occupancy pays full price.
pub const DISCOUNT_TIERS: [(f64, u32); 3] = [(1.0, 0), (0.75, 12), (0.50, 27)];

/// Discount below the lowest tier (minimum-occupancy case).
pub const LOW_OCCUPANCY_DISCOUNT: u32 = 40;

/// Map an occupancy ratio (occupied beds over unit capacity) to a discount
/// percent. A ratio above 1 still lands in the full-occupancy tier; the
/// discount is never negative. Zero occupied beds means the minimum-occupancy
/// discount on the price, not a free stay.
pub fn discount_percent(occupied_beds: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    let ratio = f64::from(occupied_beds) / f64::from(capacity);
    DISCOUNT_TIERS
        .iter()
        .find(|(threshold, _)| ratio >= *threshold)
        .map_or(LOW_OCCUPANCY_DISCOUNT, |(_, percent)| *percent)
}
