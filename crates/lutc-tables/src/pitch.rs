//! Pitch conversion tables: equal-tempered frequency ratios and harmonic
//! semitone offsets.

/// Coarse pitch-ratio table: `2^((i - size/2) / 12)` for `i in 0..size`.
///
/// Covers symmetric negative-to-positive semitone offsets around the table
/// midpoint, which maps to a ratio of exactly `1.0`.
pub fn pitch_ratios_coarse(size: usize) -> Vec<f64> {
    let half = size as f64 / 2.0;
    (0..size)
        .map(|i| 2f64.powf((i as f64 - half) / 12.0))
        .collect()
}

/// Fine pitch-ratio table: `2^x` for `x` linearly spaced over `[0, 1/12]`
/// inclusive.
///
/// One semitone subdivided for sub-semitone interpolation; the last entry is
/// exactly one semitone above the first.
pub fn pitch_ratios_fine(size: usize) -> Vec<f64> {
    let last = size.saturating_sub(1).max(1) as f64;
    (0..size)
        .map(|i| 2f64.powf(i as f64 / last / 12.0))
        .collect()
}

/// Harmonic-series pitch table: `12·log2(i) - 12` for `i in 1..=count`.
///
/// Converts a linear harmonic series into semitone offsets relative to the
/// second harmonic.
pub fn harmonic_pitches(count: usize) -> Vec<f64> {
    (1..=count)
        .map(|i| 12.0 * (i as f64).log2() - 12.0)
        .collect()
}
