//! Offline journey report: mutation index, crossed boundaries, and an
//! interpolation table with derived form parameters for a station pair.
//! Useful for eyeballing a route without spinning up the browser front end.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use postroad_core::climate::{interpolate, ClimateVector};
use postroad_core::form::FormParams;
use postroad_core::mutation::{crossed_boundaries, mutation_index};
use postroad_core::station::StationCatalog;

#[derive(Parser, Debug)]
#[command(name = "route-report", about = "Print a climate/form report for a journey between two stations")]
struct Args {
    /// Start station id (e.g. "suzhou").
    start: Option<String>,

    /// End station id (e.g. "pingyao").
    end: Option<String>,

    /// Number of interpolation steps in the table.
    #[arg(short = 'n', long, default_value = "10")]
    steps: usize,

    /// Station registry JSON file overriding the builtin catalog.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// List available station ids and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Serialize)]
struct ReportRow {
    t: f64,
    climate: ClimateVector,
    form: FormParams,
}

#[derive(Serialize)]
struct Report {
    start: String,
    end: String,
    mutation_index: u32,
    boundaries: Vec<String>,
    rows: Vec<ReportRow>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.registry {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading registry {}", path.display()))?;
            StationCatalog::from_json(&json)
                .with_context(|| format!("parsing registry {}", path.display()))?
        }
        None => StationCatalog::builtin(),
    };

    if args.list {
        for station in catalog.iter() {
            println!("{:16} {} ({}, {})", station.id, station.name, station.building_gene, station.region);
        }
        return Ok(());
    }

    let (Some(start_id), Some(end_id)) = (&args.start, &args.end) else {
        bail!("expected a start and an end station id (or --list)");
    };
    let start = catalog
        .get(start_id)
        .with_context(|| format!("unknown start station `{start_id}`"))?;
    let end = catalog
        .get(end_id)
        .with_context(|| format!("unknown end station `{end_id}`"))?;

    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let index = mutation_index(&start.climate, &end.climate);
    let boundaries: Vec<String> = crossed_boundaries(&start.climate, &end.climate)
        .into_iter()
        .map(|b| b.message().to_owned())
        .collect();

    let rows: Vec<ReportRow> = (0..=args.steps)
        .map(|n| {
            let t = n as f64 / args.steps as f64;
            let climate = interpolate(&start.climate, &end.climate, t);
            ReportRow { t, form: FormParams::from_climate(&climate), climate }
        })
        .collect();

    if args.json {
        let report = Report {
            start: start.id.clone(),
            end: end.id.clone(),
            mutation_index: index,
            boundaries,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ({}) -> {} ({})", start.name, start.building_gene, end.name, end.building_gene);
    println!("mutation index: {index}");
    if boundaries.is_empty() {
        println!("no climate boundaries crossed");
    } else {
        for message in &boundaries {
            println!("  - {message}");
        }
    }

    println!();
    println!(
        "{:>5} {:>9} {:>6} {:>6} {:>8} {:>5} {:>4}  {:>7} {:>6} {:>5}",
        "t", "rain", "humid", "temp", "alt", "sun", "def", "pitch", "eaves", "open"
    );
    for row in &rows {
        let c = &row.climate;
        let f = &row.form;
        println!(
            "{:>5.2} {:>9.1} {:>6.1} {:>6.1} {:>8.1} {:>5.2} {:>4.1}  {:>6.1}° {:>5.2}m {:>5.2}",
            row.t, c.rainfall, c.humidity, c.temperature, c.altitude, c.sunlight, c.defense,
            f.roof_pitch_deg, f.eaves_overhang_m, f.window_openness
        );
    }

    Ok(())
}
