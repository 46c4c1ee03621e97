//! Chebyshev polynomial basis tables.

/// The first `count` Chebyshev polynomials of the first kind, each sampled on
/// the inclusive grid `x_i = 2i/(size-1) - 1` over `[-1, 1]`.
///
/// Rows follow the two-term recurrence `T₀ = 1`, `T₁ = x`,
/// `Tₙ₊₁ = 2x·Tₙ - Tₙ₋₁`, so row `n` is `Tₙ`.
pub fn chebyshev_tables(count: usize, size: usize) -> Vec<Vec<f64>> {
    let last = size.saturating_sub(1).max(1) as f64;
    let grid: Vec<f64> = (0..size).map(|i| (i as f64 * 2.0) / last - 1.0).collect();

    let mut tables: Vec<Vec<f64>> = Vec::with_capacity(count);
    for n in 0..count {
        let row = match n {
            0 => vec![1.0; size],
            1 => grid.clone(),
            _ => (0..size)
                .map(|i| 2.0 * grid[i] * tables[n - 1][i] - tables[n - 2][i])
                .collect(),
        };
        tables.push(row);
    }
    tables
}
