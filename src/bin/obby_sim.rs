//! Headless Course Runner
//!
//! Run with: `cargo run --bin obby-sim -- <command>`
//!
//! Commands:
//! - `run`: simulate a course (classic, a layout file, or a generated one)
//!   with an optional input script, then print a JSON summary
//! - `generate`: write a procedurally generated layout to disk
//! - `classic`: write the hand-built layout to disk
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use clap::{Args, Parser, Subcommand};
#[cfg(not(target_arch = "wasm32"))]
use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
use obby_engine::game::{
    CourseConfig, CourseLayout, CourseState, GeneratorParams, InputScript, generate_course, run_script,
};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "obby-sim", version, about = "Drive an obstacle course without a renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a course and print a JSON run summary
    Run(RunOpts),
    /// Write a generated layout as JSON
    Generate {
        #[command(flatten)]
        generator: GenOpts,
        /// Output layout file
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the hand-built layout as JSON
    Classic {
        /// Output layout file
        #[arg(long)]
        out: PathBuf,
    },
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Args, Debug)]
struct GenOpts {
    /// Fixed seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Segments between the start and goal platforms
    #[arg(long)]
    segments: Option<u32>,
    /// Probability of a kill brick in each gap
    #[arg(long)]
    hazard_chance: Option<f64>,
    /// Probability of a spinner in each gap
    #[arg(long)]
    spinner_chance: Option<f64>,
}

#[cfg(not(target_arch = "wasm32"))]
impl GenOpts {
    fn params(&self) -> Result<GeneratorParams> {
        let defaults = GeneratorParams::default();
        let params = GeneratorParams {
            seed: self.seed,
            segments: self.segments.unwrap_or(defaults.segments),
            hazard_chance: self.hazard_chance.unwrap_or(defaults.hazard_chance),
            spinner_chance: self.spinner_chance.unwrap_or(defaults.spinner_chance),
            ..defaults
        };
        params.validate().context("generator options")?;
        Ok(params)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Args, Debug)]
struct RunOpts {
    /// Layout JSON (the classic course when neither this nor --generate is given)
    #[arg(long, conflicts_with = "generate")]
    layout: Option<PathBuf>,
    /// Play a generated course instead of a file
    #[arg(long)]
    generate: bool,
    #[command(flatten)]
    generator: GenOpts,
    /// Tuning overrides as JSON
    #[arg(long)]
    config: Option<PathBuf>,
    /// Input script JSON
    #[arg(long, conflicts_with = "frames")]
    script: Option<PathBuf>,
    /// Idle frames to simulate when no script is given
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Pretty-print the summary
    #[arg(long)]
    pretty: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    match Cli::parse().command {
        Command::Run(opts) => run(opts),
        Command::Generate { generator, out } => {
            let layout = generate_course(&generator.params()?);
            layout.save(&out).with_context(|| format!("write layout {}", out.display()))?;
            info!(course = %layout.name, path = %out.display(), "layout written");
            Ok(())
        }
        Command::Classic { out } => {
            CourseLayout::classic()
                .save(&out)
                .with_context(|| format!("write layout {}", out.display()))?;
            info!(path = %out.display(), "classic layout written");
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(opts: RunOpts) -> Result<()> {
    let layout = match (&opts.layout, opts.generate) {
        (Some(path), _) => CourseLayout::load(path).with_context(|| format!("load layout {}", path.display()))?,
        (None, true) => generate_course(&opts.generator.params()?),
        (None, false) => CourseLayout::classic(),
    };

    let config = match &opts.config {
        Some(path) => CourseConfig::load(path).with_context(|| format!("load config {}", path.display()))?,
        None => CourseConfig::default(),
    };

    let script = match &opts.script {
        Some(path) => InputScript::load(path).with_context(|| format!("load script {}", path.display()))?,
        None => InputScript::idle(opts.frames),
    };

    let mut state = CourseState::validated(layout, config).context("prepare course")?;
    info!(frames = script.total_frames(), "running");
    let summary = run_script(&mut state, &script);

    let json = if opts.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
