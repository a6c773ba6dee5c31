//! Projection of indicator rows onto axis sequences.
//!
//! Every function here returns exactly one value per axis point. Missing rows
//! and missing year cells both read as `0.0`.

pub mod derive;

use log::trace;

use crate::data::filter::{match_row, row_at, RowPredicate};
use crate::data::model::IndicatorRow;

/// Value used wherever a row or a year cell is unavailable.
pub const MISSING_VALUE: f64 = 0.0;

/// Read `row` at each axis label, in axis order.
pub fn project_series<S: AsRef<str>>(row: Option<&IndicatorRow>, axis: &[S]) -> Vec<f64> {
    axis.iter()
        .map(|label| snapshot_at(row, label.as_ref()))
        .collect()
}

/// Single-year reading of a row.
pub fn snapshot_at(row: Option<&IndicatorRow>, year: &str) -> f64 {
    let Some(row) = row else {
        return MISSING_VALUE;
    };
    match row.value(year) {
        Some(v) => v,
        None => {
            trace!(
                "no value for '{year}' in row {:?}, using {MISSING_VALUE}",
                row.label()
            );
            MISSING_VALUE
        }
    }
}

/// Match-then-project shorthand used by most time-series charts.
pub fn series_for<S: AsRef<str>>(
    rows: &[IndicatorRow],
    predicate: &RowPredicate,
    axis: &[S],
) -> Vec<f64> {
    project_series(match_row(rows, predicate), axis)
}

/// One value per slot for a single year, e.g. the six food groups of the
/// consumption radar. Slots are filled independently; an unmatched slot is
/// `0.0`.
pub fn snapshot_slots(rows: &[IndicatorRow], slots: &[(&str, RowPredicate)], year: &str) -> Vec<f64> {
    slots
        .iter()
        .map(|(_, predicate)| snapshot_at(match_row(rows, predicate), year))
        .collect()
}

/// One value per axis slot at a single year, taking the row at the same
/// position. Used where the category rows themselves form the axis (the
/// income quintiles). Surplus rows are ignored, missing ones read as `0.0`.
pub fn positional_at<S: AsRef<str>>(rows: &[IndicatorRow], axis: &[S], year: &str) -> Vec<f64> {
    (0..axis.len())
        .map(|i| snapshot_at(row_at(rows, i), year))
        .collect()
}
