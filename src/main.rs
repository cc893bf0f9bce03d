//! Replays recorded hand landmark streams through the gesture tracking pipeline.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hand_gesture_tracking::{
    config::{Config, EXAMPLE_CONFIG},
    mode::{ControllerEvent, ModeController},
    replay::read_detections,
    Error, TickOutput, TrackingSession,
};
use log::{info, warn};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark recording in JSON lines format ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Cursor smoothing factor, overrides the config file
    #[arg(short, long)]
    smoothing: Option<f64>,

    /// Gesture voting window size, overrides the config file
    #[arg(long)]
    history_size: Option<usize>,

    /// Maximum trail length, overrides the config file
    #[arg(long)]
    trail_len: Option<usize>,

    /// Mirror the x axis (selfie-view camera)
    #[arg(short, long)]
    mirror: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// One output line: the tick plus any display mode changes it caused
#[derive(Serialize)]
struct TickRecord<'a> {
    #[serde(flatten)]
    tick: &'a TickOutput,
    controller_events: Vec<ControllerEvent>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file {config_path}"))?
    } else {
        Config::default()
    };

    if let Some(smoothing) = args.smoothing {
        if config.filter_has_parameter() {
            bail!(
                "--smoothing conflicts with filter \"{}\", which sets its own ratio",
                config.cursor.filter
            );
        }
        config.cursor.smoothing_factor = smoothing;
    }
    if let Some(history_size) = args.history_size {
        config.stability.history_size = history_size;
    }
    if let Some(trail_len) = args.trail_len {
        config.trail.max_trail_len = trail_len;
    }
    if args.mirror {
        config.cursor.mirror_x = true;
    }

    let mut session = TrackingSession::new(&config).context("Invalid configuration")?;
    let mut controller = ModeController::new();

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file =
            File::open(&args.input).with_context(|| format!("Failed to open {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut faults = 0usize;

    for detection in read_detections(reader) {
        let detection = match detection {
            Err(Error::Io(e)) => return Err(e).context("Failed to read recording"),
            other => other,
        };
        if detection.is_err() {
            faults += 1;
        }

        let output = session.process_detection(detection);
        let controller_events = controller.handle(&output.gesture, None);
        for event in &controller_events {
            info!("Tick {}: {:?}", session.ticks(), event);
        }

        let record = TickRecord {
            tick: &output,
            controller_events,
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }

    out.flush()?;

    if faults > 0 {
        warn!("{} malformed records treated as missing hands", faults);
    }
    info!(
        "Processed {} ticks, final gesture {}, display mode {}",
        session.ticks(),
        session.stable_gesture(),
        controller.mode()
    );

    Ok(())
}
