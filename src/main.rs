//! fwexport - firmware release packaging for the AS608-ESP32s3 project.
//!
//! Takes the outputs of an `idf.py build` and packages them into a
//! versioned release bundle:
//! - versioned copies of firmware, bootloader and partition table images
//! - a single-file OTA update image
//! - a flash_info.txt with the esptool flashing recipe
#![allow(dead_code)]

mod audio;
mod commands;
mod common;
mod config;
mod export;
mod instructions;
mod manifest;
mod metadata;
mod process;
mod version;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::Config;

#[derive(Parser)]
#[command(name = "fwexport")]
#[command(about = "Firmware release packaging for ESP32 builds")]
#[command(
    after_help = "QUICK START:\n  fwexport export          Package the current build (timestamp version)\n  fwexport export 1.0.0    Package as release v1.0.0\n  fwexport show releases   List exported bundles\n  fwexport clean           Remove the release directory"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the current build into release/v<version>/
    Export {
        /// Release version (default: timestamp, e.g. 20260829_153000)
        version: Option<String>,
    },

    /// Convert audio files to raw PCM for the firmware's audio module
    Convert {
        /// Input audio files (WAV, MP3, OGG, FLAC)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output file (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Remove the release directory
    Clean,
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// List exported release bundles
    Releases,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir()?;

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Export { version } => {
            commands::cmd_export(&config, version.as_deref())?;
        }

        Commands::Convert { files, output, dir } => {
            commands::cmd_convert(&files, output.as_deref(), dir.as_deref())?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Releases => commands::show::ShowTarget::Releases,
            };
            commands::cmd_show(&config, show_target)?;
        }

        Commands::Clean => {
            commands::cmd_clean(&config)?;
        }
    }

    Ok(())
}
