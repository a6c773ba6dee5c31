//! Dashboard configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every chart build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Row field holding the indicator label.
    pub label_field: String,
    /// Year axis of the time-series charts, in display order.
    pub years: Vec<String>,
    /// Year used by the single-year composition charts.
    pub snapshot_year: String,
    /// Reference year of the quintile growth comparison.
    pub base_year: String,
    /// Headroom multiplier for radar axis bounds.
    pub radar_scale: f64,
    /// Build charts on the rayon pool instead of one after another.
    pub parallel: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            label_field: "指标".to_string(),
            years: (2015..=2024).map(|y| format!("{y}年")).collect(),
            snapshot_year: "2024年".to_string(),
            base_year: "2015年".to_string(),
            radar_scale: 1.2,
            parallel: true,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file. Absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).context("parsing config JSON")
    }
}
