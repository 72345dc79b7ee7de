//! Offline replay binary.
//!
//! Feeds a recorded detection trace through a [`FramingSession`] and emits
//! the resulting crop plan as JSON lines, one entry per frame. The detector
//! and the pixel pipeline stay external; this binary only exercises the
//! framing core the way the production pipeline would.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vcam_framing::{to_pixel_rect, FramingConfig, FramingSession};
use vcam_models::{dt_for_fps, FrameDetections, NormalizedRect, PixelRect};

/// Detection trace recorded from an upstream detector run.
#[derive(Debug, Deserialize)]
struct DetectionTrace {
    /// Source frame rate; non-positive falls back to 30 fps
    fps: f64,
    /// Source frame width in pixels
    width: u32,
    /// Source frame height in pixels
    height: u32,
    /// Candidates per frame, in stream order
    frames: Vec<FrameDetections>,
}

/// One line of the emitted crop plan.
#[derive(Debug, Serialize)]
struct CropPlanEntry {
    frame: usize,
    crop: NormalizedRect,
    pixel: PixelRect,
    track_id: Option<u32>,
    zoom_factor: f64,
}

fn main() {
    // Colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("vcam=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    if let Err(e) = run() {
        error!("replay failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let trace_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: vcam-replay <trace.json> [crop-plan.jsonl]"),
    };
    let output_path = args.next();

    let trace: DetectionTrace = {
        let file = File::open(&trace_path)
            .with_context(|| format!("failed to open trace {}", trace_path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to decode trace {}", trace_path))?
    };

    let config = match std::env::var("VCAM_PRESET").ok().as_deref() {
        Some("broadcast") => FramingConfig::broadcast(),
        Some("action") => FramingConfig::action(),
        Some(other) => bail!("unknown VCAM_PRESET {:?} (expected broadcast or action)", other),
        None => FramingConfig::default(),
    };

    let mut session = FramingSession::new(config)?;
    let dt = dt_for_fps(trace.fps);

    info!(
        frames = trace.frames.len(),
        fps = trace.fps,
        width = trace.width,
        height = trace.height,
        "replaying detection trace"
    );

    let mut output: Box<dyn Write> = match &output_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    for (frame, detections) in trace.frames.iter().enumerate() {
        let update = session.advance(detections, dt);
        debug!(frame, status = %update.status, "frame advanced");

        let entry = CropPlanEntry {
            frame,
            crop: update.crop,
            pixel: to_pixel_rect(&update.crop, trace.width, trace.height),
            track_id: update.status.locked_track_id,
            zoom_factor: update.status.zoom_factor,
        };
        serde_json::to_writer(&mut output, &entry)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;

    info!(
        locked_track_id = ?session.locked_track_id(),
        zoom_factor = 1.0 / session.controller().geometry().scale,
        "replay complete"
    );

    Ok(())
}
