//! Income distribution charts: quintile groups and the Gini coefficient.

use super::categories::{GINI, INCOME_QUINTILES};
use super::{ChartId, ChartOutput};
use crate::config::DashboardConfig;
use crate::data::filter::{get_rows, row_at};
use crate::data::model::Dataset;
use crate::error::Result;
use crate::series::derive::{growth_pct, ratio};
use crate::series::{positional_at, project_series};

/// Quintile groups, lowest first. The quintile category lists its rows in
/// this order.
pub const QUINTILE_GROUPS: [&str; 5] = [
    "低收入组",
    "中间偏下",
    "中间收入组",
    "中间偏上",
    "高收入组",
];

const LOWEST_GROUP: usize = 0;
const HIGHEST_GROUP: usize = 4;

/// Base year against snapshot year per quintile, with percentage growth.
pub fn income_quintiles(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let rows = get_rows(dataset, INCOME_QUINTILES)?;

    let base = positional_at(rows, &QUINTILE_GROUPS, &config.base_year);
    let current = positional_at(rows, &QUINTILE_GROUPS, &config.snapshot_year);
    let growth = growth_pct(&base, &current);

    Ok(ChartOutput::new(ChartId::IncomeQuintiles, &QUINTILE_GROUPS)
        .with_series(config.base_year.clone(), base)
        .with_series(config.snapshot_year.clone(), current)
        .with_series("增长率", growth))
}

/// Gini coefficient over the year axis next to the high/low quintile income
/// multiple.
pub fn gini_coefficient(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let gini_rows = get_rows(dataset, GINI)?;
    let quintiles = get_rows(dataset, INCOME_QUINTILES)?;
    let years = &config.years;

    let gini = project_series(row_at(gini_rows, 0), years);
    let high = project_series(row_at(quintiles, HIGHEST_GROUP), years);
    let low = project_series(row_at(quintiles, LOWEST_GROUP), years);

    Ok(ChartOutput::new(ChartId::GiniCoefficient, years)
        .with_series("基尼系数", gini)
        .with_series("高低收入倍数", ratio(&high, &low)))
}
