//! Amplitude-normalization factors for summed uniform-noise sources.
//!
//! The distribution of a sum of `k` independent uniform sources is computed by
//! iterated discrete self-convolution of a uniform kernel — progressively, one
//! convolution per added source. Downstream consumers expect the
//! discretization artifacts of this exact procedure, so a closed-form
//! Irwin–Hall evaluation is not an acceptable substitute.

/// The `k = 1` entry of the offset table, fixed by hand: a single source needs
/// no normalization headroom, and any derived value above zero would clip.
pub const OFFSET_UNITY: f64 = 0.0;

/// Discrete convolution of a distribution with the uniform kernel.
fn convolve(dist: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; dist.len() + kernel.len() - 1];
    for (i, &d) in dist.iter().enumerate() {
        for (j, &k) in kernel.iter().enumerate() {
            out[i + j] += d * k;
        }
    }
    out
}

/// Smallest deviation from zero at which the upper-tail probability of a sum
/// of `sources` uniform sources first drops below `threshold`.
///
/// The kernel is a discrete uniform distribution over `[-1, 1]` sampled at
/// `resolution` points (odd resolution keeps a bin centered on zero), with
/// mass normalized by the resolution; each added source contributes one
/// self-convolution step. If no grid point crosses the threshold the sum's
/// full amplitude `sources` is returned: beyond the support the tail is zero.
pub fn threshold_deviation(sources: usize, resolution: usize, threshold: f64) -> f64 {
    assert!(sources >= 1 && resolution >= 2);

    let kernel = vec![1.0 / resolution as f64; resolution];
    let mut dist = kernel.clone();
    for _ in 1..sources {
        dist = convolve(&dist, &kernel);
    }

    // Upper-tail probabilities: tail[i] = P(sum ≥ x_i).
    let mut tail = vec![0.0; dist.len()];
    let mut acc = 0.0;
    for i in (0..dist.len()).rev() {
        acc += dist[i];
        tail[i] = acc;
    }

    // Grid step along the value axis is 2/(resolution-1) regardless of the
    // source count; the center bin sits at a deviation of zero.
    let center = (dist.len() - 1) / 2;
    let step = 2.0 / (resolution - 1) as f64;
    for i in center..dist.len() {
        if tail[i] < threshold {
            return (i - center) as f64 * step;
        }
    }
    sources as f64
}

/// Normalization factors for `k in 1..=max_sources` summed sources: the
/// reciprocal of each count's threshold deviation.
///
/// Scaling a sum of `k` full-scale sources by its factor keeps the clipping
/// probability below `threshold`.
pub fn normalization_factors(max_sources: usize, resolution: usize, threshold: f64) -> Vec<f64> {
    (1..=max_sources)
        .map(|k| 1.0 / threshold_deviation(k, resolution, threshold))
        .collect()
}

/// The normalization factors rescaled by the source count and reduced by one,
/// with the `k = 1` entry hard-overridden to [`OFFSET_UNITY`].
///
/// The override is an explicit special case, never derived.
pub fn normalization_offsets(max_sources: usize, resolution: usize, threshold: f64) -> Vec<f64> {
    let mut table: Vec<f64> = normalization_factors(max_sources, resolution, threshold)
        .into_iter()
        .enumerate()
        .map(|(i, factor)| (i + 1) as f64 * factor - 1.0)
        .collect();
    table[0] = OFFSET_UNITY;
    table
}
