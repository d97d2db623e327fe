//! Headless simulation of a kinetic graphic gliding toward a target.
//!
//! The run summary is logged as JSON at info level, so it follows the
//! `RUST_LOG` filter like every other message.
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::Vec2;
use kinetic::{init_logging, DrawFailure, Host, KineticGraphic, ManualHost, MotionParams};
use log::{debug, info, trace};
use serde::Serialize;

/// Simulate a kinetic graphic travelling to a target
///
/// The JSON summary is logged at info level; `RUST_LOG=warn` hides it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, default_value = "0,0")]
    from: Vec2,

    /// Target position as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Vec2,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Give up if the graphic has not arrived after this many frames
    #[arg(long, default_value_t = 10_000)]
    max_frames: u32,

    /// JSON file with motion parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Fixed pointer position as X,Y used to probe hover
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pointer: Option<Vec2>,

    /// Radius around the graphic that counts as hovering
    #[arg(long, default_value_t = 10.0)]
    hover_radius: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Outcome of a completed simulation.
#[derive(Debug, Serialize)]
struct Summary {
    frames: u32,
    elapsed_seconds: f64,
    final_position: Vec2,
    hovered_frames: u32,
}

fn parse_point(raw: &str) -> Result<Vec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {raw:?}"))?;
    let coordinate = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate {part:?}: {e}"))
    };
    Ok(Vec2::new(coordinate(x)?, coordinate(y)?))
}

fn simulate(args: &Args) -> Result<Summary> {
    let params = args
        .params
        .as_deref()
        .map(MotionParams::from_path)
        .transpose()
        .context("loading motion parameters")?
        .unwrap_or_default();

    let host = Rc::new(ManualHost::new());
    let draw = Rc::new(|graphic: &KineticGraphic| -> Result<(), DrawFailure> {
        trace!(
            "drawing at {:?} (hovering: {})",
            graphic.pos(),
            graphic.is_hovering()
        );
        Ok(())
    });
    let radius = args.hover_radius;
    let detector = Rc::new(move |_: &KineticGraphic, local: Vec2| local.length() < radius);
    let hovered = Rc::new(Cell::new(0_u32));
    let tally = Rc::clone(&hovered);
    let listener = Rc::new(move |_: &mut KineticGraphic| tally.set(tally.get() + 1));

    let mut graphic = KineticGraphic::new(host.clone(), args.from, &draw).with_params(params);
    debug!("motion parameters: {:?}", graphic.params());
    if let Some(pointer) = args.pointer {
        host.set_pointer_position(pointer);
        graphic.set_hover_detector(&detector);
        graphic.set_hover_listener(&listener);
    }

    graphic.go_to(args.to);
    let frame = Duration::from_millis(args.frame_ms);
    for frames in 1..=args.max_frames {
        host.advance(frame);
        graphic.update();
        graphic.draw()?;
        debug!(
            "frame {frames}: position {:?}, speed {:.2}",
            graphic.pos(),
            graphic.speed()
        );
        if graphic.is_idling() {
            return Ok(Summary {
                frames,
                elapsed_seconds: host.now().as_secs_f64(),
                final_position: graphic.pos(),
                hovered_frames: hovered.get(),
            });
        }
    }

    bail!(
        "graphic did not reach {:?} within {} frames; stopped at {:?}",
        args.to,
        args.max_frames,
        graphic.pos()
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let summary = simulate(&args)?;
    info!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
