use clap::Parser;
use natal::ephemeris::{EphemerisOracle, SnapshotOracle};
use natal::layout::ChartLayout;
use natal::NatalChart;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute natal chart facts and wheel layout from an ephemeris snapshot")]
struct Args {
    #[arg(help = "Path to a snapshot JSON file (single object or array)")]
    snapshot: PathBuf,

    /// Chart size in pixels; overrides render.chart_size from the config.
    #[arg(long)]
    size: Option<f64>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the layout and print only the chart facts.
    #[arg(long, default_value_t = false)]
    facts_only: bool,

    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    facts: &'a NatalChart,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<ChartLayout>,
}

/// Build the chart described by `args` and render it as JSON.
fn run(args: &Args) -> anyhow::Result<String> {
    let config = natal_config::load_config(args.config.as_deref())?;
    match &config.source {
        Some(path) => log::info!("config loaded from {}", path.display()),
        None => log::info!("using built-in layout defaults"),
    }

    let oracle = SnapshotOracle::from_path(&args.snapshot)?;
    let recorded = oracle
        .snapshots()
        .first()
        .ok_or_else(|| anyhow::anyhow!("{} contains no snapshots", args.snapshot.display()))?;
    let snapshot = oracle.snapshot(recorded.instant, recorded.location)?;

    let chart = NatalChart::from_snapshot(&snapshot)?;
    log::info!(
        "chart for {}: {} planets, {} aspects",
        chart.instant,
        chart.planets.len(),
        chart.aspects.len()
    );

    let layout = if args.facts_only {
        None
    } else {
        let size = args.size.unwrap_or(config.chart_size);
        Some(chart.layout(size, &config.layout)?)
    };

    let output = Output {
        facts: &chart,
        layout,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    println!("{}", run(&args)?);
    Ok(())
}
