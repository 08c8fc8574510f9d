//! epi: command-line driver for the rust_epi epidemic simulator.
//!
//! Loads (or defaults) a parameter set, builds a world, and prints one line
//! of population counts per day until nobody is infected:
//!
//! ```text
//! ; {"algorithm_type":1,"population_count":10000000,...}
//! day, live_count, infected_count, dead_count, isolation_count, immune_count
//!    0, 10000000,     1000,        0,        0,        0
//!    1, 10000000,     1005,        1,      903,        0
//! ```
//!
//! `epi -p > params.json` writes a starting parameter file; `epi -l
//! params.json` runs it.

mod logging;

use std::io::{self, StdoutLock};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use epi_core::DiseaseParameters;
use epi_output::{CsvWriter, OutputError, StatsObserver, TextReportWriter};
use epi_sim::{DayOutcome, World, WorldObserver, WorldStat};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "epi", version, about = "Discrete-time agent-based epidemic simulator")]
struct Args {
    /// Print the default parameters as JSON and exit.
    #[arg(short = 'p', long)]
    print_params: bool,

    /// Load parameters from a JSON file (see the output of -p).
    #[arg(short = 'l', long = "load", value_name = "FILE")]
    load: Option<PathBuf>,

    /// Random seed, for repeatability.
    #[arg(short = 'r', long, default_value_t = 42)]
    seed: u64,

    /// Also write day_stats.csv into this directory.
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,

    /// Stop after this many days even if the epidemic is still active.
    #[arg(long, value_name = "DAYS")]
    max_days: Option<u32>,

    /// Log level for stderr diagnostics (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Console report, plus the CSV file when requested.
struct Reports<'a> {
    console: StatsObserver<TextReportWriter<StdoutLock<'a>>>,
    csv:     Option<StatsObserver<CsvWriter>>,
}

impl Reports<'_> {
    fn take_error(&mut self) -> Option<OutputError> {
        let csv_err = self.csv.as_mut().and_then(|c| c.take_error());
        self.console.take_error().or(csv_err)
    }
}

impl WorldObserver for Reports<'_> {
    fn on_day_stats(&mut self, day: u32, stat: &WorldStat) {
        self.console.on_day_stats(day, stat);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_day_stats(day, stat);
        }
    }

    fn on_day_end(&mut self, day: u32, outcome: &DayOutcome) {
        self.console.on_day_end(day, outcome);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_day_end(day, outcome);
        }
    }

    fn on_sim_end(&mut self, final_day: u32, stat: &WorldStat) {
        self.console.on_sim_end(final_day, stat);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_sim_end(final_day, stat);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    if args.print_params {
        println!("{}", DiseaseParameters::default().to_json_pretty()?);
        return Ok(());
    }

    let params = match &args.load {
        Some(path) => {
            let params = DiseaseParameters::from_json_file(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?;
            println!("; loaded params from {}", path.display());
            params
        }
        None => DiseaseParameters::default(),
    };
    println!("; {}", params.to_json()?);

    let t0 = Instant::now();
    let mut world = World::new(params, args.seed).context("invalid parameters")?;
    info!("population initialised in {:.3} s", t0.elapsed().as_secs_f64());

    let csv = match &args.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(StatsObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut reports = Reports {
        console: StatsObserver::new(TextReportWriter::new(io::stdout().lock())?),
        csv,
    };

    let t0 = Instant::now();
    let summary = world.run(&mut reports, args.max_days);

    if let Some(e) = reports.take_error() {
        return Err(e).context("writing report");
    }

    info!(
        "{} days simulated in {:.3} s: {} dead, {} immune{}",
        summary.days,
        t0.elapsed().as_secs_f64(),
        summary.final_stat.dead_count,
        summary.final_stat.immune_count,
        if summary.burned_out { "" } else { " (stopped on day limit)" },
    );

    Ok(())
}
