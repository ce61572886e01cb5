/// Snap an amount down to the nearest multiple of `step`. Every
/// customer-facing figure (final total, deposit, balance) goes through this
/// so quoted prices land on a clean grid; the residual is folded into the
/// reported discount by the aggregator.
pub fn round_down_to_step(amount: f64, step: f64) -> f64 {
    if amount <= 0.0 || step <= 0.0 {
        return 0.0;
    }
    (amount / step).floor() * step
}
