//! Series extraction and derived metrics for the urban/rural income
//! dashboard.
//!
//! The processed statistics export is loaded once into an immutable
//! [`Dataset`](data::model::Dataset). Each chart build then resolves its
//! categories, matches indicator rows by label, projects them onto an axis
//! and derives gaps, growth rates, ratios or radar bounds. Builds are
//! independent of each other; see [`dashboard::build_dashboard`].

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod series;

pub use charts::{ChartContext, ChartId, ChartOutput, NamedSeries};
pub use config::DashboardConfig;
pub use dashboard::{build_all, build_dashboard, ChartStatus, DashboardReport};
pub use data::model::{Dataset, IndicatorRow};
pub use error::DashboardError;
