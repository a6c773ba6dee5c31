//! Consumption charts: Engel coefficient, food consumption and durable goods.

use super::categories::{ENGEL, RURAL_DURABLES, RURAL_FOOD, URBAN_DURABLES, URBAN_FOOD};
use super::{ChartId, ChartOutput};
use crate::config::DashboardConfig;
use crate::data::filter::{get_rows, RowPredicate};
use crate::data::model::Dataset;
use crate::error::Result;
use crate::series::derive::radar_max;
use crate::series::{series_for, snapshot_slots};

/// Food groups of the consumption radar: axis label and the substring that
/// identifies the row.
const FOOD_GROUPS: [(&str, &str); 6] = [
    ("粮食", "粮食"),
    ("蔬菜及食用菌", "蔬菜"),
    ("肉类", "肉类"),
    ("禽类", "禽类"),
    ("水产品", "水产品"),
    ("奶类", "奶类"),
];

fn food_slots() -> Vec<(&'static str, RowPredicate)> {
    FOOD_GROUPS
        .iter()
        .map(|(axis, needle)| (*axis, RowPredicate::contains(*needle)))
        .collect()
}

/// Durable goods per hundred households. Mobile phones appear under two
/// names across survey years.
fn durable_slots() -> Vec<(&'static str, RowPredicate)> {
    vec![
        ("家用汽车", RowPredicate::contains("汽车")),
        ("空调", RowPredicate::contains("空调")),
        ("冰箱", RowPredicate::contains("冰箱")),
        ("洗衣机", RowPredicate::contains("洗衣机")),
        ("计算机", RowPredicate::contains("计算机")),
        (
            "移动电话",
            RowPredicate::any_of(vec![
                RowPredicate::contains("移动电话"),
                RowPredicate::contains("手机"),
            ]),
        ),
    ]
}

fn axis_of<'a>(slots: &[(&'a str, RowPredicate)]) -> Vec<&'a str> {
    slots.iter().map(|(label, _)| *label).collect()
}

/// National, urban and rural Engel coefficients over the year axis.
///
/// Every row of the category contains `居民恩格尔系数`, so the national row
/// is told apart by excluding the urban and rural prefixes.
pub fn engel_coefficient(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let rows = get_rows(dataset, ENGEL)?;
    let years = &config.years;

    let national = RowPredicate::contains("居民恩格尔系数(%)").excluding(["城镇", "农村"]);
    let urban = RowPredicate::contains("城镇居民恩格尔系数");
    let rural = RowPredicate::contains("农村居民恩格尔系数");

    Ok(ChartOutput::new(ChartId::EngelCoefficient, years)
        .with_series("全国", series_for(rows, &national, years))
        .with_series("城镇", series_for(rows, &urban, years))
        .with_series("农村", series_for(rows, &rural, years)))
}

/// Snapshot-year food consumption radar with per-axis upper bounds.
pub fn food_consumption(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let urban_rows = get_rows(dataset, URBAN_FOOD)?;
    let rural_rows = get_rows(dataset, RURAL_FOOD)?;

    let slots = food_slots();
    let urban = snapshot_slots(urban_rows, &slots, &config.snapshot_year);
    let rural = snapshot_slots(rural_rows, &slots, &config.snapshot_year);
    let bounds = radar_max(&urban, &rural, config.radar_scale);

    Ok(ChartOutput::new(ChartId::FoodConsumption, &axis_of(&slots))
        .with_snapshot_title(&config.snapshot_year)
        .with_series("城镇居民", urban)
        .with_series("农村居民", rural)
        .with_bounds(bounds))
}

/// Urban meat, aquatic product and dairy consumption over the year axis.
pub fn food_trend(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let rows = get_rows(dataset, URBAN_FOOD)?;
    let years = &config.years;

    let mut chart = ChartOutput::new(ChartId::FoodTrend, years);
    for name in ["肉类", "水产品", "奶类"] {
        chart = chart.with_series(name, series_for(rows, &RowPredicate::contains(name), years));
    }
    Ok(chart)
}

/// Snapshot-year durable goods ownership, urban against rural.
pub fn durable_goods(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let urban_rows = get_rows(dataset, URBAN_DURABLES)?;
    let rural_rows = get_rows(dataset, RURAL_DURABLES)?;

    let slots = durable_slots();
    Ok(ChartOutput::new(ChartId::DurableGoods, &axis_of(&slots))
        .with_snapshot_title(&config.snapshot_year)
        .with_series(
            "城镇居民",
            snapshot_slots(urban_rows, &slots, &config.snapshot_year),
        )
        .with_series(
            "农村居民",
            snapshot_slots(rural_rows, &slots, &config.snapshot_year),
        ))
}
