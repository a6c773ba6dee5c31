/// Chart builders: one pure function per dashboard chart.
///
/// Each builder reads the shared, immutable [`Dataset`] and returns a
/// [`ChartOutput`]: named numeric series aligned to one axis, plus optional
/// per-axis bounds for radar charts. Builders never depend on each other.
///
/// ```text
///   &Dataset ──┬─► income::*        ─┐
///              ├─► distribution::*   ├─► ChartOutput
///              ├─► consumption::*    │
///   &Sentiment ┴─► sentiment::*     ─┘
/// ```
pub mod categories;
pub mod consumption;
pub mod distribution;
pub mod income;
pub mod sentiment;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::error::Result;
use sentiment::SentimentDataset;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A numeric sequence with the legend name the renderer shows for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub data: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Everything the rendering side needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOutput {
    pub id: ChartId,
    pub title: String,
    /// Shared axis of every series (years, groups, categories).
    pub axis: Vec<String>,
    pub series: Vec<NamedSeries>,
    /// Per-axis upper bounds, only for radar charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<f64>>,
}

impl ChartOutput {
    pub fn new<S: AsRef<str>>(id: ChartId, axis: &[S]) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            axis: axis.iter().map(|s| s.as_ref().to_string()).collect(),
            series: Vec::new(),
            bounds: None,
        }
    }

    /// Builder-style series append.
    pub fn with_series(mut self, name: impl Into<String>, data: Vec<f64>) -> Self {
        self.series.push(NamedSeries::new(name, data));
        self
    }

    /// Suffix the title with the year a single-year chart was taken at.
    pub fn with_snapshot_title(mut self, year: &str) -> Self {
        self.title = format!("{}（{year}）", self.id.title());
        self
    }

    pub fn with_bounds(mut self, bounds: Vec<f64>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.data.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Chart catalogue
// ---------------------------------------------------------------------------

/// Every chart of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    IncomeComparison,
    MedianComparison,
    UrbanIncomeStructure,
    RuralIncomeStructure,
    IncomeTrend,
    IncomeQuintiles,
    GiniCoefficient,
    EngelCoefficient,
    FoodConsumption,
    FoodTrend,
    DurableGoods,
    SentimentTrend,
    TopicSentiment,
    AchievementChallenge,
    KeywordTimeline,
}

impl ChartId {
    pub const ALL: [ChartId; 15] = [
        ChartId::IncomeComparison,
        ChartId::MedianComparison,
        ChartId::UrbanIncomeStructure,
        ChartId::RuralIncomeStructure,
        ChartId::IncomeTrend,
        ChartId::IncomeQuintiles,
        ChartId::GiniCoefficient,
        ChartId::EngelCoefficient,
        ChartId::FoodConsumption,
        ChartId::FoodTrend,
        ChartId::DurableGoods,
        ChartId::SentimentTrend,
        ChartId::TopicSentiment,
        ChartId::AchievementChallenge,
        ChartId::KeywordTimeline,
    ];

    /// Stable identifier, also used for export file names.
    pub fn key(self) -> &'static str {
        match self {
            ChartId::IncomeComparison => "income_comparison",
            ChartId::MedianComparison => "median_comparison",
            ChartId::UrbanIncomeStructure => "urban_income_structure",
            ChartId::RuralIncomeStructure => "rural_income_structure",
            ChartId::IncomeTrend => "income_trend",
            ChartId::IncomeQuintiles => "income_quintiles",
            ChartId::GiniCoefficient => "gini_coefficient",
            ChartId::EngelCoefficient => "engel_coefficient",
            ChartId::FoodConsumption => "food_consumption",
            ChartId::FoodTrend => "food_trend",
            ChartId::DurableGoods => "durable_goods",
            ChartId::SentimentTrend => "sentiment_trend",
            ChartId::TopicSentiment => "topic_sentiment",
            ChartId::AchievementChallenge => "achievement_challenge",
            ChartId::KeywordTimeline => "keyword_timeline",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::IncomeComparison => "城乡居民人均可支配收入对比",
            ChartId::MedianComparison => "收入平均数与中位数对比",
            ChartId::UrbanIncomeStructure => "城镇居民收入结构",
            ChartId::RuralIncomeStructure => "农村居民收入结构",
            ChartId::IncomeTrend => "城乡居民主要收入来源十年变化",
            ChartId::IncomeQuintiles => "全国居民按收入五等份分组的收入情况",
            ChartId::GiniCoefficient => "基尼系数与高低收入倍数关系",
            ChartId::EngelCoefficient => "居民恩格尔系数变化",
            ChartId::FoodConsumption => "城乡居民主要食品消费量对比",
            ChartId::FoodTrend => "城镇居民食品消费十年变化",
            ChartId::DurableGoods => "城乡居民主要耐用消费品拥有量",
            ChartId::SentimentTrend => "媒体报道情感倾向十年演变",
            ChartId::TopicSentiment => "民生议题情感分布",
            ChartId::AchievementChallenge => "成就与挑战报道平衡",
            ChartId::KeywordTimeline => "不同时期民生关键词热度变化",
        }
    }

    pub fn from_key(key: &str) -> Option<ChartId> {
        ChartId::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Whether the chart reads the precomputed sentiment input rather than
    /// the statistics dataset.
    pub fn is_sentiment(self) -> bool {
        matches!(
            self,
            ChartId::SentimentTrend
                | ChartId::TopicSentiment
                | ChartId::AchievementChallenge
                | ChartId::KeywordTimeline
        )
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Read-only inputs shared by all chart builds of one dashboard run.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    pub dataset: &'a Dataset,
    pub config: &'a DashboardConfig,
    pub sentiment: Option<&'a SentimentDataset>,
}

/// Build a single chart.
pub fn build_chart(id: ChartId, ctx: &ChartContext<'_>) -> Result<ChartOutput> {
    let (dataset, config) = (ctx.dataset, ctx.config);
    match id {
        ChartId::IncomeComparison => income::income_comparison(dataset, config),
        ChartId::MedianComparison => income::median_comparison(dataset, config),
        ChartId::UrbanIncomeStructure => {
            income::income_structure(dataset, config, income::Residence::Urban)
        }
        ChartId::RuralIncomeStructure => {
            income::income_structure(dataset, config, income::Residence::Rural)
        }
        ChartId::IncomeTrend => income::income_trend(dataset, config),
        ChartId::IncomeQuintiles => distribution::income_quintiles(dataset, config),
        ChartId::GiniCoefficient => distribution::gini_coefficient(dataset, config),
        ChartId::EngelCoefficient => consumption::engel_coefficient(dataset, config),
        ChartId::FoodConsumption => consumption::food_consumption(dataset, config),
        ChartId::FoodTrend => consumption::food_trend(dataset, config),
        ChartId::DurableGoods => consumption::durable_goods(dataset, config),
        ChartId::SentimentTrend
        | ChartId::TopicSentiment
        | ChartId::AchievementChallenge
        | ChartId::KeywordTimeline => sentiment::sentiment_chart(id, ctx.sentiment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for id in ChartId::ALL {
            assert_eq!(ChartId::from_key(id.key()), Some(id));
        }
        assert_eq!(ChartId::from_key("pie"), None);
    }

    #[test]
    fn serialized_id_matches_key() {
        let json = serde_json::to_string(&ChartId::FoodConsumption).unwrap();
        assert_eq!(json, "\"food_consumption\"");
    }

    #[test]
    fn bounds_are_omitted_when_absent() {
        let chart = ChartOutput::new(ChartId::FoodTrend, &["2015年"]).with_series("肉类", vec![1.0]);
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json.get("bounds").is_none());
        assert_eq!(chart.series("肉类"), Some(&[1.0][..]));
    }
}
