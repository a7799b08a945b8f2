//! tower: console driver for the rust_lift building simulator.
//!
//! ```text
//! tower [--config FILE.json] [--script FILE.csv] [--ticks N] [--out DIR]
//! ```
//!
//! Settings missing from the config file (or all of them, without one) are
//! prompted for on stdin.  Without `--script` a small built-in morning rush
//! is replayed.  `RUST_LOG` controls verbosity (default `info`).

use std::io::{self, BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info, warn};

use lift_core::BuildingConfig;
use lift_output::{CsvWriter, TraceObserver};
use lift_sim::{load_script_csv, load_script_reader, BuildingBuilder};


// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS:   u64  = 200;
const DEFAULT_OUT_DIR: &str = "output/tower";

// Morning rush: lobby crowds heading up, a few people heading down later.
const RUSH_CSV: &str = "\
tick,floor,direction,people\n\
0,1,up,4\n\
0,6,down,1\n\
3,1,up,3\n\
5,4,up,2\n\
8,1,up,5\n\
12,9,down,2\n\
15,1,up,2\n\
20,7,down,3\n\
25,3,up,1\n\
30,10,down,2\n\
";

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(about = "Run the rust_lift building simulator from the console")]
struct Args {
    /// JSON building config; unset settings are prompted for.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Call script CSV (`tick,floor,direction,people`).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of ticks to run.
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Directory for the CSV trace.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<BuildingConfig> {
    let Some(path) = path else {
        return Ok(BuildingConfig::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: BuildingConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Ask on stdin for every unset setting until each gets an accepted value.
fn prompt_missing(config: &mut BuildingConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for setting in config.missing_settings() {
        loop {
            print!("{}: ", setting.prompt());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                bail!("stdin closed before {setting} was set");
            };
            let line = line?;
            let value: i32 = match line.trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    warn!("{:?} is not a whole number", line.trim());
                    continue;
                }
            };
            match config.set(setting, value) {
                Ok(()) => break,
                Err(e) => warn!("{e}"),
            }
        }
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // 1. Settings: file first, console for the rest.
    let mut config = load_config(args.config.as_deref())?;
    if !config.is_complete() {
        prompt_missing(&mut config)?;
        config.validate()?;
    }

    // 2. Building.
    let mut building = BuildingBuilder::from_config(&config)?;
    info!(
        "building ready: {} floors, {} elevators, seed {}",
        building.total_floors(),
        building.elevators().len(),
        config.seed,
    );

    // 3. Calls.
    let mut script = match &args.script {
        Some(path) => load_script_csv(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_script_reader(Cursor::new(RUSH_CSV))?,
    };
    if let Some(last) = script.last_tick() {
        info!("{} scripted calls up to {last}", script.len());
    }

    // 4. Trace output.
    std::fs::create_dir_all(&args.out)?;
    let mut obs = TraceObserver::new(CsvWriter::new(&args.out)?);

    // 5. Run.
    let t0 = Instant::now();
    building.run_script(&mut script, args.ticks, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        error!("output error: {e}");
    }

    // 6. Summary.
    info!("{} ticks in {:.3} s, trace in {}", args.ticks, elapsed.as_secs_f64(), args.out.display());
    if !script.is_empty() {
        warn!("{} scripted calls fell after the last tick", script.len());
    }
    info!(
        "waiting: {}  riding: {}",
        building.waiting_total(),
        building.riding_total(),
    );
    for line in building.display_status() {
        info!("{line}");
    }

    Ok(())
}
