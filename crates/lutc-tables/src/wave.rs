//! Waveform and waveshaping tables: sine sampling, base-2 exponential,
//! wavefolder curve, triangle breakpoint shapes.

use std::f64::consts::PI;

/// One full sine period sampled at `size + 1` points: `sin(2π·i/size)` for
/// `i in 0..=size`.
///
/// The extra point repeats the cycle start so the consumer can interpolate
/// across the wrap without a modulo.
pub fn sine(size: usize) -> Vec<f64> {
    (0..=size)
        .map(|i| (i as f64 / size as f64 * 2.0 * PI).sin())
        .collect()
}

/// The sine table quantized to 16-bit fixed point: scaled by `32767` and
/// truncated toward zero.
pub fn sine_i16(size: usize) -> Vec<i16> {
    sine(size).into_iter().map(|v| (v * 32767.0) as i16).collect()
}

/// Base-2 exponential in u0.23 fixed point: `2^(i/size) · 2^23` truncated,
/// for `i in 0..size`.
///
/// The consumer combines a table lookup with linear interpolation for fast
/// exponentiation; values stay below `2^24`.
pub fn exp2_u0_23(size: usize) -> Vec<u32> {
    let scale = (1u32 << 23) as f64;
    (0..size)
        .map(|i| ((i as f64 / size as f64).exp2() * scale) as u32)
        .collect()
}

/// Wavefolder transfer curve over an inclusive grid spanning
/// `[-folds, folds]`.
///
/// With `g(x) = 1/(1+|x|)`, each point is `g(x)·(x + sin(16·x·g(x)))`: a
/// closed-form folding curve whose oscillation rate tapers as the gain
/// envelope decays.
pub fn wavefolder(size: usize, folds: usize) -> Vec<f64> {
    let last = size.saturating_sub(1).max(1) as f64;
    (0..size)
        .map(|i| {
            let x = folds as f64 * (2.0 * i as f64 / last - 1.0);
            let g = 1.0 / (1.0 + x.abs());
            g * (x + (16.0 * x * g).sin())
        })
        .collect()
}

/// Hand-authored upper halves of the triangle waveshaper breakpoint tables,
/// in twelfths. Each row starts at the center point.
const TRIANGLE_HALVES: [[i32; 5]; 8] = [
    [0, 3, 6, 9, 12],
    [0, 4, 8, 12, 12],
    [0, 6, 12, 12, 12],
    [0, 12, 12, 12, 12],
    [0, 6, 12, 6, 12],
    [0, 12, 0, 6, 12],
    [0, 12, -12, 6, 12],
    [0, 12, -12, 12, -12],
];

/// Triangle waveshaper breakpoint tables.
///
/// Each hand-authored half is mirrored — negated and reversed, duplicate
/// center point dropped — into a symmetric odd-function table, then scaled
/// from twelfths to `[-1, 1]`.
pub fn triangle_shapes() -> Vec<Vec<f64>> {
    TRIANGLE_HALVES
        .iter()
        .map(|half| {
            let mut points: Vec<i32> = half[1..].iter().rev().map(|&v| -v).collect();
            points.extend_from_slice(half);
            points.into_iter().map(|v| v as f64 / 12.0).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn sine_has_closing_point() {
        let table = sine(1024);
        assert_eq!(table.len(), 1025);
        assert_eq!(table[0], 0.0);
        // The closing point re-samples the cycle start.
        assert_abs_diff_eq!(table[1024], table[0], epsilon = 1e-12);
        assert_relative_eq!(table[256], 1.0, max_relative = 1e-12);
        assert_relative_eq!(table[768], -1.0, max_relative = 1e-12);
    }

    #[test]
    fn sine_i16_spans_full_range() {
        let table = sine_i16(1024);
        assert_eq!(table.len(), 1025);
        assert_eq!(table[0], 0);
        assert_eq!(table[1024], 0);
        assert_eq!(table[256], 32767);
        assert_eq!(table[768], -32767);
    }

    #[test]
    fn exp2_is_monotonic_and_stays_in_24_bits() {
        let table = exp2_u0_23(1024);
        assert_eq!(table[0], 1 << 23);
        for pair in table.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(*table.last().unwrap() < 1 << 24);
    }

    #[test]
    fn wavefolder_is_odd_and_zero_at_center() {
        let table = wavefolder(1025, 6);
        assert_abs_diff_eq!(table[512], 0.0, epsilon = 1e-12);
        for i in 0..table.len() {
            assert_abs_diff_eq!(table[i], -table[1024 - i], epsilon = 1e-9);
        }
    }

    #[test]
    fn wavefolder_stays_bounded() {
        // g(x)·x stays below 1 and the sine term below g(x), so |fold| < 2.
        for v in wavefolder(1025, 6) {
            assert!(v.abs() < 2.0);
        }
    }

    #[test]
    fn triangle_shapes_are_symmetric_odd_tables() {
        let shapes = triangle_shapes();
        assert_eq!(shapes.len(), 8);
        for shape in &shapes {
            assert_eq!(shape.len(), 9);
            assert_eq!(shape[4], 0.0);
            for i in 0..9 {
                assert_abs_diff_eq!(shape[i], -shape[8 - i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn first_triangle_shape_is_linear() {
        let shapes = triangle_shapes();
        for (i, v) in shapes[0].iter().enumerate() {
            assert_abs_diff_eq!(*v, i as f64 / 4.0 - 1.0, epsilon = 1e-12);
        }
    }
}
