/// Proportional share of the party assigned to one unit: larger units absorb
/// proportionally more guests, so discount tiers reflect realistic per-unit
/// occupancy. The share is `ceil(total_guests * unit_capacity /
/// total_capacity)`, clamped to the unit's own capacity.
pub fn occupied_beds(total_guests: u32, unit_capacity: u32, total_capacity: u32) -> u32 {
    if total_capacity == 0 {
        return 0;
    }
    let share = (total_guests * unit_capacity).div_ceil(total_capacity);
    share.min(unit_capacity)
}

/// Even split across the selected units, used only as a whole-party default
/// when no specific unit is being asked about.
pub fn even_split(total_guests: u32, unit_count: usize) -> u32 {
    let count = u32::try_from(unit_count).unwrap_or(u32::MAX);
    if count == 0 {
        return 0;
    }
    total_guests.div_ceil(count)
}
