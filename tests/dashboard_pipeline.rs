use std::io::Write;

use serde_json::json;

use income_dashboard::charts::sentiment::SentimentDataset;
use income_dashboard::data::loader::{dataset_from_json, load_file};
use income_dashboard::{build_all, ChartContext, ChartId, ChartStatus, DashboardConfig, Dataset};

fn years(values: &[f64]) -> serde_json::Map<String, serde_json::Value> {
    (2015..=2024)
        .zip(values)
        .map(|(y, v)| (format!("{y}年"), json!(v)))
        .collect()
}

fn row(label: &str, values: &[f64]) -> serde_json::Value {
    let mut obj = years(values);
    obj.insert("指标".into(), json!(label));
    serde_json::Value::Object(obj)
}

fn ramp(start: f64, step: f64) -> Vec<f64> {
    (0..10).map(|i| start + step * i as f64).collect()
}

fn fixture() -> Dataset {
    let doc = json!({
        "城镇居民人均收入情况": { "data": [
            row("城镇居民人均可支配收入(元)", &ramp(31194.0, 2555.0)),
            row("城镇居民人均可支配工资性收入(元)", &ramp(19337.0, 1400.0)),
        ]},
        "农村居民人均收入情况": { "data": [
            row("农村居民人均可支配收入(元)", &ramp(11422.0, 1300.0)),
        ]},
        "居民恩格尔系数": { "data": [
            row("城镇居民恩格尔系数(%)", &ramp(29.7, -0.1)),
            row("农村居民恩格尔系数(%)", &ramp(33.0, -0.1)),
            row("居民恩格尔系数(%)", &ramp(30.6, -0.1)),
        ]},
        "城镇居民主要食品消费量": { "data": [
            row("肉类(千克)", &ramp(28.9, 1.0)),
            { "指标": null, "2024年": 1.0 },
        ]},
        "农村居民主要食品消费量": { "data": [
            row("肉类(千克)", &ramp(23.1, 1.0)),
        ]}
    });
    dataset_from_json(&doc, "指标").expect("fixture parses")
}

fn built(status: Option<&ChartStatus>) -> &income_dashboard::ChartOutput {
    status.and_then(ChartStatus::output).expect("chart built")
}

#[test]
fn charts_with_data_build_and_others_are_skipped() {
    let dataset = fixture();
    let config = DashboardConfig::default();
    let ctx = ChartContext {
        dataset: &dataset,
        config: &config,
        sentiment: None,
    };
    let report = build_all(&ctx);
    assert_eq!(report.charts.len(), ChartId::ALL.len());

    let comparison = built(report.get(ChartId::IncomeComparison));
    assert_eq!(comparison.axis.len(), 10);
    let gap = comparison.series("城乡差距").unwrap();
    assert_eq!(gap[0], 31194.0 - 11422.0);
    for s in &comparison.series {
        assert_eq!(s.data.len(), comparison.axis.len(), "series {}", s.name);
    }

    let engel = built(report.get(ChartId::EngelCoefficient));
    assert_eq!(engel.series("全国").unwrap()[0], 30.6);

    let radar = built(report.get(ChartId::FoodConsumption));
    let bounds = radar.bounds.as_ref().unwrap();
    let urban = radar.series("城镇居民").unwrap();
    let rural = radar.series("农村居民").unwrap();
    for i in 0..bounds.len() {
        assert!(bounds[i] >= urban[i].max(rural[i]));
    }

    for id in [
        ChartId::MedianComparison,
        ChartId::IncomeQuintiles,
        ChartId::GiniCoefficient,
        ChartId::DurableGoods,
        ChartId::SentimentTrend,
    ] {
        assert!(
            matches!(report.get(id), Some(ChartStatus::Skipped { .. })),
            "{id} should be skipped"
        );
    }
}

#[test]
fn sentiment_input_fills_sentiment_charts() {
    let dataset = Dataset::new();
    let sentiment = SentimentDataset::illustrative();
    let config = DashboardConfig {
        parallel: false,
        ..DashboardConfig::default()
    };
    let ctx = ChartContext {
        dataset: &dataset,
        config: &config,
        sentiment: Some(&sentiment),
    };
    let report = build_all(&ctx);
    let keywords = built(report.get(ChartId::KeywordTimeline));
    assert_eq!(keywords.axis.len(), 8);
    assert_eq!(keywords.series.len(), 4);
    assert_eq!(report.built().count(), 4);
}

#[test]
fn json_file_round_trip_through_loader() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let doc = json!({
        "居民人均可支配收入基尼系数": { "data": [ row("基尼系数", &ramp(0.462, 0.0)) ] },
        "全国居民按收入五等份分组的收入情况": { "data": [
            row("低收入组", &ramp(12345.0, 0.0)),
            row("中间偏下", &ramp(20000.0, 0.0)),
            row("中间收入组", &ramp(30000.0, 0.0)),
            row("中间偏上", &ramp(40000.0, 0.0)),
            row("高收入组", &ramp(54188.0, 0.0)),
        ]}
    });
    write!(file, "{doc}").unwrap();
    file.flush().unwrap();

    let dataset = load_file(file.path(), "指标").unwrap();
    let config = DashboardConfig::default();
    let ctx = ChartContext {
        dataset: &dataset,
        config: &config,
        sentiment: None,
    };
    let report = build_all(&ctx);
    let gini = built(report.get(ChartId::GiniCoefficient));
    assert_eq!(gini.series("高低收入倍数").unwrap(), &[4.39; 10]);

    let quintiles = built(report.get(ChartId::IncomeQuintiles));
    assert_eq!(quintiles.series("增长率").unwrap(), &[0.0; 5]);
}
