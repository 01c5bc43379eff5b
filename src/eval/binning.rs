//! Bin indices from ratios, with explicit clamping.
//!
//! Both helpers compute `value × bins / scale` with a single division, so
//! an integer ratio `m / n` that scales to a whole number is exact. The
//! result is clamped into `[0, max_index]`. Values at or above `scale` land in `max_index`;
//! negative and NaN ratios land in bin 0. The caller never has to keep the
//! ratio strictly below 1.

/// Nearest-integer bin: `round(value / scale × bins)`.
#[must_use]
pub fn rounded_bin(value: f64, scale: f64, bins: usize, max_index: usize) -> usize {
    clamp_index((value * bins as f64 / scale).round(), max_index)
}

/// Half-open bin: bin `i` covers `[i, i + 1)` of the scaled range.
#[must_use]
pub fn floored_bin(value: f64, scale: f64, bins: usize, max_index: usize) -> usize {
    clamp_index((value * bins as f64 / scale).floor(), max_index)
}

fn clamp_index(raw: f64, max_index: usize) -> usize {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // `as` saturates for out-of-range floats.
    (raw as usize).min(max_index)
}
