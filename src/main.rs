//! climate-grid CLI - Synthetic climate grid generator.
//!
//! Serve time-indexed temperature fields over HTTP, or write a single field
//! as GeoJSON.

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use climate_grid::export::{export_field_geojson, stream_field_geojson, ExportError};
use climate_grid::field::{FieldConfig, FieldSynthesizer};
use climate_grid::grid::GridSpec;
use climate_grid::server;
use climate_grid::time::TimeConfig;

/// Time-indexed synthetic climate grid generator.
#[derive(Parser)]
#[command(name = "climate-grid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve fields as GeoJSON at /api/weather.
    Serve {
        /// TCP address to bind the web server.
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Write one field as GeoJSON.
    Generate {
        /// Month offset from Jan 1750. Unparseable values use the default index.
        #[arg(short, long, allow_hyphen_values = true)]
        time_index: Option<String>,

        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Display grid dimensions and field statistics.
    Info {
        /// Month offset from Jan 1750.
        #[arg(short, long, allow_hyphen_values = true)]
        time_index: Option<i64>,

        #[command(flatten)]
        field: FieldArgs,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Grid spacing in degrees.
    #[arg(long, default_value = "4.0")]
    step: f64,

    /// Time index used when a request has no usable timeIndex.
    #[arg(long, default_value = "3310", allow_hyphen_values = true)]
    default_time_index: i64,
}

impl FieldArgs {
    fn synthesizer(&self) -> FieldSynthesizer {
        let config = FieldConfig {
            time: TimeConfig::with_default_index(self.default_time_index),
            grid: GridSpec { step_deg: self.step },
            ..Default::default()
        };
        FieldSynthesizer::new(config).unwrap_or_else(|e| {
            error!("{e}");
            std::process::exit(1);
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("climate_grid=info,tower_http=info"));

    // Logs go to stderr so GeoJSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, field } => {
            if let Err(e) = server::serve(bind, field.synthesizer()).await {
                error!("{e}");
                std::process::exit(1);
            }
        }
        Commands::Generate {
            time_index,
            output,
            pretty,
            field,
        } => run_generate(time_index.as_deref(), output, pretty, &field.synthesizer()),
        Commands::Info { time_index, field } => run_info(time_index, &field.synthesizer()),
    }
}

fn run_generate(raw_index: Option<&str>, output: Option<PathBuf>, pretty: bool, synth: &FieldSynthesizer) {
    let time_index = synth.resolve_index(raw_index);
    let start = Instant::now();

    let result = match &output {
        Some(path) => export_field_geojson(synth, time_index, path, pretty),
        None => {
            let mut stdout = std::io::stdout().lock();
            stream_field_geojson(synth, time_index, &mut stdout, pretty)
                .and_then(|()| writeln!(stdout).map_err(ExportError::from))
        }
    };

    if let Err(e) = result {
        error!("Error exporting GeoJSON: {e}");
        std::process::exit(1);
    }

    let time = synth.resolve_time(time_index);
    match &output {
        Some(path) => info!(
            time_index,
            time = %time.label,
            "Exported {} points to {} in {:.2?}",
            synth.grid().len(),
            path.display(),
            start.elapsed()
        ),
        None => info!(time_index, time = %time.label, "Exported {} points", synth.grid().len()),
    }
}

fn run_info(time_index: Option<i64>, synth: &FieldSynthesizer) {
    let time_index = time_index.unwrap_or_else(|| synth.default_time_index());
    let grid = synth.grid();
    let time = synth.resolve_time(time_index);
    let nominal = synth.config().time.nominal_range();

    let start = Instant::now();
    let field = synth.synthesize(time_index);
    let summary = field.summary();
    let elapsed = start.elapsed();

    println!("climate-grid - Field Configuration Info");
    println!("=======================================");
    println!();
    println!("Grid:");
    println!("  Resolution: {}", field.metadata().resolution);
    println!("  Rows (lat): {:>8}", grid.rows());
    println!("  Cols (lng): {:>8}", grid.cols());
    println!("  Points:     {:>8}", grid.len());
    println!();
    println!("Time:");
    println!("  Index:      {:>8}", time_index);
    println!("  Label:      {}", time.label);
    println!(
        "  Nominal:    {}..={} ({} .. {})",
        nominal.start(),
        nominal.end(),
        synth.resolve_time(*nominal.start()).label,
        synth.resolve_time(*nominal.end()).label
    );
    if !nominal.contains(&time_index) {
        println!("  Note:       index is outside the nominal range; the trend extrapolates");
    }
    println!();
    println!("Temperature (degree C):");
    println!("  Min:        {:>8.1}", summary.min_temperature_c);
    println!("  Max:        {:>8.1}", summary.max_temperature_c);
    println!("  Mean:       {:>8.2}", summary.mean_temperature_c);
    println!();
    println!("Synthesized in {:.2?}", elapsed);
}
