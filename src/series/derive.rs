//! Derived series computed positionally from already projected base series.
//!
//! Pairwise operations walk both inputs in lockstep and stop at the shorter
//! one. Series coming out of the projection layer are always aligned to the
//! same axis, so in practice both sides have equal length.

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `a[i] - b[i]`, e.g. the urban/rural income gap.
pub fn gap(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Percentage growth from `base` to `current`, one decimal place.
///
/// A zero base yields `inf`/`NaN`, which is passed through untouched.
pub fn growth_pct(base: &[f64], current: &[f64]) -> Vec<f64> {
    base.iter()
        .zip(current)
        .map(|(b, c)| round_to((c - b) / b * 100.0, 1))
        .collect()
}

/// `high[i] / low[i]`, two decimal places. Same zero pass-through as
/// [`growth_pct`].
pub fn ratio(high: &[f64], low: &[f64]) -> Vec<f64> {
    high.iter()
        .zip(low)
        .map(|(h, l)| round_to(h / l, 2))
        .collect()
}

/// Per-axis radar upper bound: the larger of both values times `scale`.
pub fn radar_max(a: &[f64], b: &[f64], scale: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x.max(*y) * scale).collect()
}
