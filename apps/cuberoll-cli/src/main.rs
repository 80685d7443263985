use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use cuberoll_input::{InputFrame, Key};
use cuberoll_kernel::{Scene, SceneConfig, SceneEvent};
use cuberoll_motion::RollTable;
use cuberoll_tools::{FrameTimer, SceneInspector};
use glam::Vec2;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuberoll-cli", about = "Headless driver for the rolling cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print the 16-entry (facing, command) roll table
    Table {
        /// Cube edge length
        #[arg(long, default_value = "1.0")]
        size: f32,
    },
    /// Run a key script through the scene, one character per frame
    Simulate {
        /// w/a/s/d press a key that frame, '.' is an idle frame
        #[arg(short, long, default_value = "wwdd")]
        keys: String,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Orbit drag in pixels applied before the script, as "dx,dy"
        #[arg(long, value_parser = parse_drag, allow_hyphen_values = true)]
        drag: Option<Vec2>,
        /// Hold the fast-roll modifier for the whole run
        #[arg(long)]
        boost: bool,
        /// Idle frames allowed after the script for the cube to settle
        #[arg(long, default_value = "1000")]
        settle_frames: usize,
    },
    /// Load and validate a config file, then print it with defaults filled in
    CheckConfig { path: PathBuf },
}

fn parse_drag(s: &str) -> Result<Vec2, String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"dx,dy\", got {s:?}"))?;
    let dx: f32 = dx.trim().parse().map_err(|e| format!("dx: {e}"))?;
    let dy: f32 = dy.trim().parse().map_err(|e| format!("dy: {e}"))?;
    Ok(Vec2::new(dx, dy))
}

/// One script character: a key edge or an idle frame.
fn parse_script(script: &str) -> anyhow::Result<Vec<Option<Key>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' => Ok(None),
            c => match Key::from_char(c) {
                Some(key) => Ok(Some(key)),
                None => bail!("unknown key {c:?} in script (expected w, a, s, d or .)"),
            },
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn run_frame(scene: &mut Scene, input: &InputFrame, timer: &mut FrameTimer) {
    let start = Instant::now();
    scene.step(input);
    timer.record(start.elapsed());

    for event in scene.drain_events() {
        tracing::debug!(?event, frame = scene.frame(), "scene event");
        if let SceneEvent::RollSettled { .. } = event {
            println!("settled: {}", SceneInspector::readout(scene));
        }
    }
}

fn simulate(
    config: SceneConfig,
    keys: &str,
    dt: f32,
    drag: Option<Vec2>,
    boost: bool,
    settle_frames: usize,
) -> anyhow::Result<()> {
    if !(dt.is_finite() && dt >= 0.0) {
        bail!("dt must be a non-negative number, got {dt}");
    }
    let script = parse_script(keys)?;
    let mut scene = Scene::new(config).context("building scene")?;
    let mut timer = FrameTimer::new(256);

    println!("start:   {}", SceneInspector::readout(&scene));

    if let Some(drag) = drag {
        let press = InputFrame::idle(0.0).with_drag(Vec2::ZERO);
        run_frame(&mut scene, &press, &mut timer);
        let release = InputFrame::idle(0.0).with_drag(drag);
        run_frame(&mut scene, &release, &mut timer);
        tracing::info!(facing = %scene.motion().facing(), "camera dragged");
    }

    for key in script {
        let mut input = InputFrame::idle(dt).with_boost(boost);
        if let Some(key) = key {
            input = input.with_key(key);
        }
        run_frame(&mut scene, &input, &mut timer);
    }

    let idle = InputFrame::idle(dt).with_boost(boost);
    let mut idle_frames = 0;
    while scene.motion().is_animating() && idle_frames < settle_frames {
        run_frame(&mut scene, &idle, &mut timer);
        idle_frames += 1;
    }
    if scene.motion().is_animating() {
        tracing::warn!(settle_frames, "cube still rolling after settle budget");
    }

    println!("final:   {}", SceneInspector::readout(&scene));
    println!(
        "frames: {}  step avg {:?}  max {:?}",
        scene.frame(),
        timer.average(),
        timer.max()
    );
    Ok(())
}

fn print_table(size: f32) -> anyhow::Result<()> {
    if !(size.is_finite() && size > 0.0) {
        bail!("size must be > 0, got {size}");
    }
    let table = RollTable::new(size);
    println!(
        "{:<6} {:<12} {:<5} {:<22} axis",
        "facing", "command", "dir", "pivot offset"
    );
    for (facing, command, step) in table.iter() {
        let p = step.pivot_offset;
        let a = step.axis;
        println!(
            "{:<6} {:<12} {:<5} ({:>5.2}, {:>5.2}, {:>5.2})  ({:>2}, {:>2}, {:>2})",
            facing.to_string(),
            format!("{command:?}"),
            step.direction.to_string(),
            p.x,
            p.y,
            p.z,
            a.x,
            a.y,
            a.z,
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("cuberoll-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", cuberoll_common::crate_info());
            println!("motion: {}", cuberoll_motion::crate_info());
            println!("camera: {}", cuberoll_camera::crate_info());
            println!("input: {}", cuberoll_input::crate_info());
            println!("kernel: {}", cuberoll_kernel::crate_info());
            println!("tools: {}", cuberoll_tools::crate_info());
        }
        Commands::Table { size } => print_table(size)?,
        Commands::Simulate {
            keys,
            dt,
            drag,
            boost,
            settle_frames,
        } => {
            let config = load_config(cli.config.as_deref())?;
            simulate(config, &keys, dt, drag, boost, settle_frames)?;
        }
        Commands::CheckConfig { path } => {
            let config = load_config(Some(&path))?;
            println!("{} is valid", path.display());
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
