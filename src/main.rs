//! Hexbounce entry point
//!
//! Runs the simulation headless into a vertex surface and prints a JSON
//! summary of the final state.
//!
//! Usage: hexbounce [CONFIG.json] [--frames N] [--realtime SECONDS]

use std::process::ExitCode;
use std::time::Duration;

use hexbounce::SimConfig;
use hexbounce::renderer::VertexSurface;
use hexbounce::sim::{FixedFrames, FrameSource, RealtimeClock};

/// Default headless run length (10 seconds at 60 Hz)
const DEFAULT_FRAMES: u64 = 600;

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    frames: Option<u64>,
    realtime: Option<f32>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = Some(value.parse().map_err(|_| format!("bad frame count: {value}"))?);
            }
            "--realtime" => {
                let value = iter.next().ok_or("--realtime needs a value")?;
                args.realtime =
                    Some(value.parse().map_err(|_| format!("bad duration: {value}"))?);
            }
            _ if args.config.is_none() && !arg.starts_with("--") => args.config = Some(arg),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }
    Ok(args)
}

fn run(args: Args) -> hexbounce::Result<()> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => {
            log::info!("Using default config");
            SimConfig::default()
        }
    };

    let mut sim = config.build()?;
    let mut surface = VertexSurface::default();
    let mut frames: Box<dyn FrameSource> = match args.realtime {
        Some(secs) if secs.is_finite() && secs >= 0.0 => Box::new(RealtimeClock::new(
            config.canvas.fps,
            Some(Duration::from_secs_f32(secs)),
        )),
        _ => Box::new(FixedFrames::from_fps(
            config.canvas.fps,
            args.frames.unwrap_or(DEFAULT_FRAMES),
        )),
    };

    let summary = sim.run(frames.as_mut(), &mut surface)?;
    log::debug!("Last frame: {} triangles", surface.triangle_count());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hexbounce starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: hexbounce [CONFIG.json] [--frames N] [--realtime SECONDS]");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
