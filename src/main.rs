use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use log::info;

use income_dashboard::charts::sentiment::SentimentDataset;
use income_dashboard::data::loader::load_file;
use income_dashboard::export::{save_csv_dir, save_report};
use income_dashboard::{build_dashboard, ChartContext, ChartId, DashboardConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build dashboard chart series from processed statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build chart series and write them as JSON (and optionally CSV)
    Build(BuildArgs),
    /// List categories and indicator labels of a dataset
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Processed dataset (.json or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    dataset: PathBuf,

    /// Dashboard configuration JSON
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Precomputed sentiment input JSON; sentiment charts are skipped without it
    #[arg(long, value_hint = ValueHint::FilePath)]
    sentiment: Option<PathBuf>,

    /// Output JSON path (`-` for stdout)
    #[arg(short, long, default_value = "-", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Also write one CSV per chart into this directory
    #[arg(long, value_hint = ValueHint::DirPath)]
    csv_dir: Option<PathBuf>,

    /// Only build these charts (comma separated keys, e.g. `gini_coefficient`)
    #[arg(long, value_delimiter = ',')]
    charts: Vec<String>,

    /// Build charts one after another instead of in parallel
    #[arg(long)]
    sequential: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Processed dataset (.json or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    dataset: PathBuf,

    /// Row field holding the indicator label
    #[arg(long, default_value = "指标")]
    label_field: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => run_build(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if args.sequential {
        config.parallel = false;
    }

    let dataset = load_file(&args.dataset, &config.label_field)
        .with_context(|| format!("loading dataset {}", args.dataset.display()))?;
    let sentiment = args
        .sentiment
        .as_deref()
        .map(SentimentDataset::from_file)
        .transpose()?;

    let ids = selected_charts(&args.charts)?;
    let ctx = ChartContext {
        dataset: &dataset,
        config: &config,
        sentiment: sentiment.as_ref(),
    };
    let report = build_dashboard(&ctx, &ids);

    save_report(&report, &args.output)?;
    if let Some(dir) = &args.csv_dir {
        save_csv_dir(&report, dir)?;
    }
    info!(
        "{} of {} charts built",
        report.built().count(),
        report.charts.len()
    );
    Ok(())
}

fn selected_charts(keys: &[String]) -> Result<Vec<ChartId>> {
    if keys.is_empty() {
        return Ok(ChartId::ALL.to_vec());
    }
    keys.iter()
        .map(|key| match ChartId::from_key(key.trim()) {
            Some(id) => Ok(id),
            None => bail!("unknown chart '{key}'"),
        })
        .collect()
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let dataset = load_file(&args.dataset, &args.label_field)?;
    for name in dataset.category_names() {
        let Some(category) = dataset.category(name) else {
            continue;
        };
        let years: Vec<&str> = category.column_keys().into_iter().collect();
        println!("{name}  ({} rows; {})", category.data.len(), years.join(", "));
        for row in &category.data {
            println!("    {}", row.label().unwrap_or("<unlabelled>"));
        }
    }
    Ok(())
}
