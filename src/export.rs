//! Hand-off of built charts to the rendering side: one JSON document for the
//! whole dashboard, or one CSV table per chart.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::charts::ChartOutput;
use crate::dashboard::DashboardReport;

/// Serialize the report as pretty JSON.
///
/// JSON has no encoding for non-finite numbers: a `NaN` or infinite value
/// (e.g. growth from a zero base) is written as `null`. The CSV tables keep
/// them as `NaN` / `inf`.
pub fn write_report_json<W: Write>(report: &DashboardReport, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report).context("serializing dashboard report")
}

/// Write the report to `path`, or stdout when `path` is `-`.
///
/// Non-finite series values appear as `null`; see [`write_report_json`].
pub fn save_report(report: &DashboardReport, path: &Path) -> Result<()> {
    if path == Path::new("-") {
        let stdout = std::io::stdout();
        write_report_json(report, stdout.lock())?;
        println!();
        return Ok(());
    }
    let file = fs::File::create(path)
        .with_context(|| format!("creating report {}", path.display()))?;
    write_report_json(report, std::io::BufWriter::new(file))?;
    info!("wrote dashboard report to {}", path.display());
    Ok(())
}

/// CSV layout: an `axis` column followed by one column per series, one line
/// per axis point. Bounds, when present, become a trailing `bounds` column.
pub fn write_chart_csv<W: Write>(chart: &ChartOutput, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["axis".to_string()];
    header.extend(chart.series.iter().map(|s| s.name.clone()));
    if chart.bounds.is_some() {
        header.push("bounds".to_string());
    }
    wtr.write_record(&header).context("writing CSV header")?;

    for (i, label) in chart.axis.iter().enumerate() {
        let mut record = vec![label.clone()];
        record.extend(
            chart
                .series
                .iter()
                .map(|s| s.data.get(i).map(f64::to_string).unwrap_or_default()),
        );
        if let Some(bounds) = &chart.bounds {
            record.push(bounds.get(i).map(f64::to_string).unwrap_or_default());
        }
        wtr.write_record(&record)
            .with_context(|| format!("writing CSV row for '{label}'"))?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

/// Write every built chart of the report as `<dir>/<chart key>.csv`.
pub fn save_csv_dir(report: &DashboardReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();
    for chart in report.built() {
        let path = dir.join(format!("{}.csv", chart.id.key()));
        let file = fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_chart_csv(chart, file)?;
        written.push(path);
    }
    info!("wrote {} chart tables to {}", written.len(), dir.display());
    Ok(written)
}
