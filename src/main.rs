// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use edgecam::session::{Orientation, RenderMode};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "edgecam")]
#[command(about = "Camera frame pipeline with edge detection and GPU preview")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the synthetic capture/render demo
    Run {
        /// Number of frames to capture
        #[arg(short, long, default_value = "60")]
        frames: u32,

        /// Capture frame width (must be even)
        #[arg(long, default_value = "640")]
        width: u32,

        /// Capture frame height (must be even)
        #[arg(long, default_value = "480")]
        height: u32,

        /// Capture rotation in degrees (0, 90, 180 or 270)
        #[arg(short, long, default_value = "0")]
        rotation: u32,

        /// Initial render mode index (see 'edgecam modes')
        #[arg(short, long)]
        mode: Option<u8>,

        /// Initial orientation index (see 'edgecam modes')
        #[arg(long)]
        orientation: Option<u8>,

        /// Save the final presented frame as PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List render modes and orientations
    Modes,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=edgecam=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            frames,
            width,
            height,
            rotation,
            mode,
            orientation,
            output,
        }) => cli::run(cli::RunOptions {
            frames,
            width,
            height,
            rotation,
            mode: mode.map(RenderMode::from_u8),
            orientation: orientation.map(Orientation::from_u8),
            output,
        }),
        Some(Commands::Modes) => cli::list_modes(),
        None => cli::run(cli::RunOptions {
            frames: 60,
            width: 640,
            height: 480,
            rotation: 0,
            mode: None,
            orientation: None,
            output: None,
        }),
    }
}
