//! Urban/rural income charts.

use log::debug;

use super::categories::{NATIONAL_INCOME, RURAL_INCOME, URBAN_INCOME};
use super::{ChartId, ChartOutput};
use crate::config::DashboardConfig;
use crate::data::filter::{get_rows, RowPredicate};
use crate::data::model::Dataset;
use crate::error::Result;
use crate::series::derive::gap;
use crate::series::{series_for, snapshot_slots};

/// Which half of the urban/rural split a chart reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residence {
    Urban,
    Rural,
}

impl Residence {
    pub fn category(self) -> &'static str {
        match self {
            Residence::Urban => URBAN_INCOME,
            Residence::Rural => RURAL_INCOME,
        }
    }

    /// Label prefix of this residence's indicators.
    pub fn prefix(self) -> &'static str {
        match self {
            Residence::Urban => "城镇",
            Residence::Rural => "农村",
        }
    }

    /// Exact indicator label, e.g. `城镇居民人均可支配收入(元)`.
    fn indicator(self, rest: &str) -> RowPredicate {
        RowPredicate::exact(format!("{}居民人均可支配{rest}", self.prefix()))
    }
}

/// The four income sources of the composition charts: axis label and label
/// suffix of the indicator row.
const INCOME_SOURCES: [(&str, &str); 4] = [
    ("工资性收入", "工资性收入(元)"),
    ("经营净收入", "经营净收入(元)"),
    ("财产净收入", "财产净收入(元)"),
    ("转移净收入", "转移净收入(元)"),
];

/// Disposable income, growth rates and the urban − rural gap over the year
/// axis.
pub fn income_comparison(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let urban = get_rows(dataset, URBAN_INCOME)?;
    let rural = get_rows(dataset, RURAL_INCOME)?;
    let years = &config.years;

    let urban_income = series_for(urban, &Residence::Urban.indicator("收入(元)"), years);
    let rural_income = series_for(rural, &Residence::Rural.indicator("收入(元)"), years);
    let urban_growth = series_for(urban, &Residence::Urban.indicator("收入比上年增长(%)"), years);
    let rural_growth = series_for(rural, &Residence::Rural.indicator("收入比上年增长(%)"), years);
    let difference = gap(&urban_income, &rural_income);

    Ok(ChartOutput::new(ChartId::IncomeComparison, years)
        .with_series("城镇收入", urban_income)
        .with_series("农村收入", rural_income)
        .with_series("城乡差距", difference)
        .with_series("城镇增长率", urban_growth)
        .with_series("农村增长率", rural_growth))
}

/// Mean against median disposable income for the nation, towns and villages.
pub fn median_comparison(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let national = get_rows(dataset, NATIONAL_INCOME)?;
    let urban = get_rows(dataset, URBAN_INCOME)?;
    let rural = get_rows(dataset, RURAL_INCOME)?;
    let years = &config.years;

    let mut chart = ChartOutput::new(ChartId::MedianComparison, years)
        .with_series(
            "全国平均",
            series_for(national, &RowPredicate::exact("居民人均可支配收入(元)"), years),
        )
        .with_series(
            "全国中位",
            series_for(national, &RowPredicate::exact("居民人均可支配收入中位数(元)"), years),
        );

    for (residence, rows, name) in [
        (Residence::Urban, urban, "城镇"),
        (Residence::Rural, rural, "农村"),
    ] {
        chart = chart
            .with_series(
                format!("{name}平均"),
                series_for(rows, &residence.indicator("收入(元)"), years),
            )
            .with_series(
                format!("{name}中位"),
                series_for(rows, &residence.indicator("收入中位数(元)"), years),
            );
    }
    Ok(chart)
}

/// Snapshot-year breakdown of disposable income by source.
pub fn income_structure(
    dataset: &Dataset,
    config: &DashboardConfig,
    residence: Residence,
) -> Result<ChartOutput> {
    let rows = get_rows(dataset, residence.category())?;
    let slots: Vec<(&str, RowPredicate)> = INCOME_SOURCES
        .iter()
        .map(|(axis, suffix)| (*axis, residence.indicator(suffix)))
        .collect();
    let values = snapshot_slots(rows, &slots, &config.snapshot_year);
    debug!(
        "{} income structure at {}: {values:?}",
        residence.prefix(),
        config.snapshot_year
    );

    let id = match residence {
        Residence::Urban => ChartId::UrbanIncomeStructure,
        Residence::Rural => ChartId::RuralIncomeStructure,
    };
    let axis: Vec<&str> = slots.iter().map(|(label, _)| *label).collect();
    Ok(ChartOutput::new(id, &axis)
        .with_snapshot_title(&config.snapshot_year)
        .with_series(config.snapshot_year.clone(), values))
}

/// Wage and business income over the year axis for both residences.
pub fn income_trend(dataset: &Dataset, config: &DashboardConfig) -> Result<ChartOutput> {
    let urban = get_rows(dataset, URBAN_INCOME)?;
    let rural = get_rows(dataset, RURAL_INCOME)?;
    let years = &config.years;

    Ok(ChartOutput::new(ChartId::IncomeTrend, years)
        .with_series(
            "城镇工资性",
            series_for(urban, &Residence::Urban.indicator("工资性收入(元)"), years),
        )
        .with_series(
            "城镇经营性",
            series_for(urban, &Residence::Urban.indicator("经营净收入(元)"), years),
        )
        .with_series(
            "农村工资性",
            series_for(rural, &Residence::Rural.indicator("工资性收入(元)"), years),
        )
        .with_series(
            "农村经营性",
            series_for(rural, &Residence::Rural.indicator("经营净收入(元)"), years),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::IndicatorRow;
    use crate::error::DashboardError;

    fn config() -> DashboardConfig {
        DashboardConfig {
            years: vec!["2015年".into(), "2024年".into()],
            ..DashboardConfig::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset::new()
            .with_category(
                URBAN_INCOME,
                vec![
                    IndicatorRow::new("城镇居民人均可支配收入(元)")
                        .with_cell("2015年", 31194.0)
                        .with_cell("2024年", 54188.0),
                    IndicatorRow::new("城镇居民人均可支配工资性收入(元)").with_cell("2024年", 32000.0),
                    IndicatorRow::new("城镇居民人均可支配转移净收入(元)").with_cell("2024年", 9000.0),
                ],
            )
            .with_category(
                RURAL_INCOME,
                vec![IndicatorRow::new("农村居民人均可支配收入(元)")
                    .with_cell("2015年", 11422.0)
                    .with_cell("2024年", 23119.0)],
            )
    }

    #[test]
    fn comparison_computes_gap_and_zero_fills_growth() {
        let chart = income_comparison(&dataset(), &config()).unwrap();
        assert_eq!(chart.axis, vec!["2015年", "2024年"]);
        assert_eq!(chart.series("城镇收入"), Some(&[31194.0, 54188.0][..]));
        assert_eq!(chart.series("城乡差距"), Some(&[19772.0, 31069.0][..]));
        assert_eq!(chart.series("城镇增长率"), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn median_needs_national_category() {
        let err = median_comparison(&dataset(), &config()).unwrap_err();
        assert_eq!(err, DashboardError::CategoryNotFound(NATIONAL_INCOME.into()));
    }

    fn row(label: &str, y2015: f64, y2024: f64) -> IndicatorRow {
        IndicatorRow::new(label)
            .with_cell("2015年", y2015)
            .with_cell("2024年", y2024)
    }

    fn full_dataset() -> Dataset {
        Dataset::new()
            .with_category(
                NATIONAL_INCOME,
                vec![
                    row("居民人均可支配收入中位数(元)", 19281.0, 34707.0),
                    row("居民人均可支配收入(元)", 21966.0, 41314.0),
                ],
            )
            .with_category(
                URBAN_INCOME,
                vec![
                    row("城镇居民人均可支配收入(元)", 31195.0, 54188.0),
                    row("城镇居民人均可支配收入中位数(元)", 29129.0, 49302.0),
                    row("城镇居民人均可支配工资性收入(元)", 19337.0, 32000.0),
                    row("城镇居民人均可支配经营净收入(元)", 3476.0, 5800.0),
                ],
            )
            .with_category(
                RURAL_INCOME,
                vec![
                    row("农村居民人均可支配收入(元)", 11422.0, 23119.0),
                    row("农村居民人均可支配工资性收入(元)", 4600.0, 9799.0),
                    // Near-miss label: exact matching must not pick it up.
                    row("农村居民人均可支配经营净收入(元)增长", 1.0, 1.0),
                ],
            )
    }

    #[test]
    fn median_comparison_pairs_average_and_median() {
        let chart = median_comparison(&full_dataset(), &config()).unwrap();
        assert_eq!(chart.series("全国平均"), Some(&[21966.0, 41314.0][..]));
        assert_eq!(chart.series("全国中位"), Some(&[19281.0, 34707.0][..]));
        assert_eq!(chart.series("城镇平均"), Some(&[31195.0, 54188.0][..]));
        assert_eq!(chart.series("城镇中位"), Some(&[29129.0, 49302.0][..]));
        assert_eq!(chart.series("农村平均"), Some(&[11422.0, 23119.0][..]));
        assert_eq!(chart.series("农村中位"), Some(&[0.0, 0.0][..]));
        assert_eq!(chart.series.len(), 6);
    }

    #[test]
    fn income_trend_reads_wage_and_business_rows() {
        let chart = income_trend(&full_dataset(), &config()).unwrap();
        assert_eq!(chart.axis, vec!["2015年", "2024年"]);
        assert_eq!(chart.series("城镇工资性"), Some(&[19337.0, 32000.0][..]));
        assert_eq!(chart.series("城镇经营性"), Some(&[3476.0, 5800.0][..]));
        assert_eq!(chart.series("农村工资性"), Some(&[4600.0, 9799.0][..]));
        assert_eq!(chart.series("农村经营性"), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn structure_reads_snapshot_year() {
        let chart = income_structure(&dataset(), &config(), Residence::Urban).unwrap();
        assert_eq!(chart.axis, vec!["工资性收入", "经营净收入", "财产净收入", "转移净收入"]);
        assert_eq!(chart.series("2024年"), Some(&[32000.0, 0.0, 0.0, 9000.0][..]));
        assert_eq!(chart.title, "城镇居民收入结构（2024年）");

        let rural = income_structure(&dataset(), &config(), Residence::Rural).unwrap();
        assert_eq!(rural.id, ChartId::RuralIncomeStructure);
        assert_eq!(rural.series("2024年"), Some(&[0.0; 4][..]));
    }
}
