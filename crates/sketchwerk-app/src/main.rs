// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketchwerk — turn a photograph into a pencil sketch.
//
// Entry point. Initialises logging, resolves the controls from the config file
// and flags, runs the sketch once, and writes the result.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sketchwerk_app::SketchSession;
use sketchwerk_core::human_errors::humanize_error;
use sketchwerk_core::types::BLUR_RADIUS_RANGE;
use sketchwerk_core::{SketchConfig, SketchError};
use sketchwerk_image::Photo;

/// Convert a JPEG or PNG photograph into a pencil sketch.
#[derive(Parser, Debug)]
#[command(name = "sketchwerk")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input photograph (JPEG or PNG).
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output path. Defaults to the configured name (pencil_sketch.jpg).
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Blur level: Gaussian kernel side, odd, 3-49.
    #[arg(short, long, value_name = "INT")]
    blur: Option<u32>,

    /// Sketch scale: dodge intensity, 200-250.
    #[arg(short, long, value_name = "INT")]
    scale: Option<u32>,

    /// Overall darkness in percent, 0-100.
    #[arg(short, long, value_name = "INT")]
    darkness: Option<u32>,

    /// JPEG quality (1-100).
    #[arg(short, long, value_name = "INT", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// JSON settings file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the effective settings to this JSON file.
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Snap out-of-range controls into range instead of failing.
    #[arg(long)]
    clamp: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        if let Some(sketch_err) = err.downcast_ref::<SketchError>() {
            eprintln!("{}", humanize_error(sketch_err));
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SketchConfig::load(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => SketchConfig::default(),
    };
    apply_overrides(&mut config, args);

    if let Some(path) = &args.save_config {
        config
            .params
            .validate()
            .context("Refusing to save settings that cannot be used")?;
        config
            .save(path)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Settings saved");
    }

    let photo = Photo::open(&args.input).context("Failed to load photo")?;
    let session = SketchSession::new(photo, config.params).context("Failed to sketch photo")?;

    let output = output_path(args, &config);
    sketchwerk_image::save(session.output(), &output, config.jpeg_quality)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Sketched {} -> {} ({})",
        args.input.display(),
        output.display(),
        session.params()
    );
    Ok(())
}

/// Where the sketch goes: `-o` if given, else the configured file name in the
/// working directory.
fn output_path(args: &Args, config: &SketchConfig) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_name))
}

/// Layer command-line flags over the loaded settings.
fn apply_overrides(config: &mut SketchConfig, args: &Args) {
    let mut params = config.params;
    if let Some(blur) = args.blur {
        params.blur_radius = blur;
    }
    if let Some(scale) = args.scale {
        params.scale = scale;
    }
    if let Some(darkness) = args.darkness {
        params.darkness = darkness;
    }
    if args.clamp {
        let clamped = params.clamped();
        if clamped != params {
            tracing::warn!(
                requested = %params,
                used = %clamped,
                blur_range = ?BLUR_RADIUS_RANGE,
                "Controls snapped into range"
            );
        }
        params = clamped;
    }
    config.params = params;

    if let Some(quality) = args.quality {
        config.jpeg_quality = quality;
    }
}
