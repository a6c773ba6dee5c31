use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::charts::{build_chart, ChartContext, ChartId, ChartOutput};

// ---------------------------------------------------------------------------
// Dashboard run: every chart built independently from one immutable dataset
// ---------------------------------------------------------------------------

/// Outcome of one chart build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartStatus {
    Built(ChartOutput),
    /// The chart could not be built; the rest of the dashboard is unaffected.
    Skipped { id: ChartId, reason: String },
}

impl ChartStatus {
    pub fn id(&self) -> ChartId {
        match self {
            ChartStatus::Built(chart) => chart.id,
            ChartStatus::Skipped { id, .. } => *id,
        }
    }

    pub fn output(&self) -> Option<&ChartOutput> {
        match self {
            ChartStatus::Built(chart) => Some(chart),
            ChartStatus::Skipped { .. } => None,
        }
    }
}

/// All chart outcomes of one run, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardReport {
    pub charts: Vec<ChartStatus>,
}

impl DashboardReport {
    pub fn get(&self, id: ChartId) -> Option<&ChartStatus> {
        self.charts.iter().find(|c| c.id() == id)
    }

    /// Successfully built charts.
    pub fn built(&self) -> impl Iterator<Item = &ChartOutput> {
        self.charts.iter().filter_map(ChartStatus::output)
    }

    pub fn skipped_count(&self) -> usize {
        self.charts.len() - self.built().count()
    }
}

/// Build the requested charts.
///
/// Each build only reads the context, so with `config.parallel` set they run
/// on the rayon pool. A failing build is recorded as skipped.
pub fn build_dashboard(ctx: &ChartContext<'_>, ids: &[ChartId]) -> DashboardReport {
    let run = |id: &ChartId| build_one(*id, ctx);
    let charts: Vec<ChartStatus> = if ctx.config.parallel {
        ids.par_iter().map(run).collect()
    } else {
        ids.iter().map(run).collect()
    };

    let report = DashboardReport { charts };
    info!(
        "dashboard built: {} charts, {} skipped",
        report.charts.len(),
        report.skipped_count()
    );
    report
}

/// Build every chart of the dashboard.
pub fn build_all(ctx: &ChartContext<'_>) -> DashboardReport {
    build_dashboard(ctx, &ChartId::ALL)
}

fn build_one(id: ChartId, ctx: &ChartContext<'_>) -> ChartStatus {
    match build_chart(id, ctx) {
        Ok(chart) => {
            info!("built chart {id} ({} series)", chart.series.len());
            ChartStatus::Built(chart)
        }
        Err(e) => {
            warn!("skipping chart {id}: {e}");
            ChartStatus::Skipped {
                id,
                reason: e.to_string(),
            }
        }
    }
}
