//! Media sentiment charts.
//!
//! These figures come from a separate, already aggregated news-analysis
//! input rather than the statistics table, so the builders only validate
//! alignment and pass the series through.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{ChartId, ChartOutput, NamedSeries};
use crate::error::{DashboardError, Result};

/// One precomputed panel: an axis and the series aligned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecomputedPanel {
    pub axis: Vec<String>,
    pub series: Vec<NamedSeries>,
}

impl PrecomputedPanel {
    fn new(axis: &[&str], series: Vec<(&str, Vec<f64>)>) -> Self {
        Self {
            axis: axis.iter().map(|s| s.to_string()).collect(),
            series: series
                .into_iter()
                .map(|(name, data)| NamedSeries::new(name, data))
                .collect(),
        }
    }

    /// Every series must have one value per axis point.
    pub fn validate(&self) -> Result<()> {
        for s in &self.series {
            if s.data.len() != self.axis.len() {
                return Err(DashboardError::LengthMismatch {
                    name: s.name.clone(),
                    expected: self.axis.len(),
                    actual: s.data.len(),
                });
            }
        }
        Ok(())
    }
}

/// The aggregated news-analysis input behind the four sentiment charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDataset {
    /// Yearly sentiment shares and report volume.
    pub trend: PrecomputedPanel,
    /// Sentiment shares per livelihood topic.
    pub topics: PrecomputedPanel,
    /// Achievement against challenge coverage, with the balance index.
    pub achievement: PrecomputedPanel,
    /// Keyword mention frequency, one series per period.
    pub keywords: PrecomputedPanel,
}

const YEARS: [&str; 10] = [
    "2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024",
];

impl SentimentDataset {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading sentiment input {}", path.display()))?;
        serde_json::from_str(&text).context("parsing sentiment JSON")
    }

    /// The illustrative figures published with the dashboard.
    pub fn illustrative() -> Self {
        Self {
            trend: PrecomputedPanel::new(
                &YEARS,
                vec![
                    ("积极情感", vec![72.0, 75.0, 78.0, 82.0, 85.0, 68.0, 88.0, 87.0, 89.0, 91.0]),
                    ("中性情感", vec![22.0, 20.0, 18.0, 15.0, 13.0, 25.0, 10.0, 11.0, 9.0, 7.0]),
                    ("关注挑战", vec![6.0, 5.0, 4.0, 3.0, 2.0, 7.0, 2.0, 2.0, 2.0, 2.0]),
                    ("报道总量", vec![45.0, 52.0, 58.0, 65.0, 72.0, 95.0, 120.0, 88.0, 92.0, 105.0]),
                ],
            ),
            topics: PrecomputedPanel::new(
                &["收入分配", "城乡差距", "就业保障", "医疗健康", "社会保障", "消费升级", "收入增长", "脱贫攻坚"],
                vec![
                    ("积极", vec![68.0, 72.0, 82.0, 85.0, 88.0, 90.0, 95.0, 98.0]),
                    ("中性", vec![25.0, 22.0, 15.0, 13.0, 10.0, 8.0, 4.0, 2.0]),
                    ("谨慎", vec![7.0, 6.0, 3.0, 2.0, 2.0, 2.0, 1.0, 0.0]),
                ],
            ),
            achievement: PrecomputedPanel::new(
                &YEARS,
                vec![
                    ("成就报道占比", vec![88.0, 87.0, 86.0, 85.0, 84.0, 82.0, 83.0, 82.0, 81.0, 82.0]),
                    ("挑战报道占比", vec![12.0, 13.0, 14.0, 15.0, 16.0, 18.0, 17.0, 18.0, 19.0, 18.0]),
                    ("平衡指数", vec![0.68, 0.70, 0.72, 0.74, 0.76, 0.78, 0.77, 0.78, 0.79, 0.78]),
                ],
            ),
            keywords: PrecomputedPanel::new(
                &["数字经济", "绿色发展", "共同富裕", "乡村振兴", "新基建", "全面小康", "脱贫攻坚", "收入增长"],
                vec![
                    ("2015-2017", vec![5.0, 8.0, 12.0, 15.0, 10.0, 45.0, 85.0, 92.0]),
                    ("2018-2019", vec![12.0, 15.0, 25.0, 35.0, 22.0, 75.0, 95.0, 88.0]),
                    ("2020-2021", vec![25.0, 30.0, 45.0, 65.0, 55.0, 98.0, 72.0, 68.0]),
                    ("2022-2024", vec![68.0, 55.0, 85.0, 78.0, 75.0, 45.0, 25.0, 52.0]),
                ],
            ),
        }
    }

    fn panel(&self, id: ChartId) -> Option<&PrecomputedPanel> {
        match id {
            ChartId::SentimentTrend => Some(&self.trend),
            ChartId::TopicSentiment => Some(&self.topics),
            ChartId::AchievementChallenge => Some(&self.achievement),
            ChartId::KeywordTimeline => Some(&self.keywords),
            _ => None,
        }
    }
}

/// Pass a precomputed panel through as a chart, after checking alignment.
pub fn sentiment_chart(id: ChartId, sentiment: Option<&SentimentDataset>) -> Result<ChartOutput> {
    let panel = sentiment
        .and_then(|s| s.panel(id))
        .ok_or(DashboardError::SentimentUnavailable)?;
    panel.validate()?;

    let mut chart = ChartOutput::new(id, &panel.axis);
    chart.series = panel.series.clone();
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustrative_panels_are_aligned() {
        let data = SentimentDataset::illustrative();
        for id in ChartId::ALL.into_iter().filter(|id| id.is_sentiment()) {
            let chart = sentiment_chart(id, Some(&data)).unwrap();
            assert!(!chart.series.is_empty());
        }
    }

    #[test]
    fn missing_input_skips_chart() {
        assert_eq!(
            sentiment_chart(ChartId::SentimentTrend, None),
            Err(DashboardError::SentimentUnavailable)
        );
    }

    #[test]
    fn misaligned_series_is_rejected() {
        let mut data = SentimentDataset::illustrative();
        data.topics.series[1].data.pop();
        assert_eq!(
            sentiment_chart(ChartId::TopicSentiment, Some(&data)),
            Err(DashboardError::LengthMismatch {
                name: "中性".into(),
                expected: 8,
                actual: 7,
            })
        );
    }

    #[test]
    fn statistics_charts_have_no_panel() {
        let data = SentimentDataset::illustrative();
        assert_eq!(
            sentiment_chart(ChartId::GiniCoefficient, Some(&data)),
            Err(DashboardError::SentimentUnavailable)
        );
    }
}
