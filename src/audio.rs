//! Audio-to-PCM conversion for the firmware's audio module.
//!
//! Wraps ffmpeg to produce raw PCM in the fixed format the firmware
//! plays back: 16-bit signed little-endian, mono, 16 kHz. No coupling to
//! the export pipeline - this is a standalone utility.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::common::ensure_parent_exists;
use crate::process::Cmd;

/// Playback sample rate expected by the firmware.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Bytes per sample (16-bit mono).
pub const BYTES_PER_SAMPLE: u32 = 2;

/// A successfully converted PCM file.
#[derive(Debug, Clone)]
pub struct ConvertedPcm {
    /// Output path written.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Playback duration in milliseconds, derived from the fixed format.
    pub duration_ms: u64,
}

/// Verify ffmpeg is on PATH before starting a batch.
pub fn check_ffmpeg() -> Result<()> {
    which::which("ffmpeg")
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("ffmpeg not found. Please install ffmpeg and add it to PATH."))
}

/// Compute the output path for an input file.
///
/// Priority: explicit output file, then output directory with the
/// input's stem and a `.pcm` extension, then a `.pcm` sibling of the
/// input.
pub fn output_path(input: &Path, output: Option<&Path>, dir: Option<&Path>) -> PathBuf {
    if let Some(out) = output {
        return out.to_path_buf();
    }
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let file_name = format!("{}.pcm", stem.to_string_lossy());
    match dir {
        Some(dir) => dir.join(file_name),
        None => input.with_extension("pcm"),
    }
}

/// Convert one audio file to raw PCM.
pub fn convert_to_pcm(input: &Path, output: Option<&Path>, dir: Option<&Path>) -> Result<ConvertedPcm> {
    if !input.exists() {
        bail!("File not found: {}", input.display());
    }

    let out_path = output_path(input, output, dir);
    ensure_parent_exists(&out_path)?;

    Cmd::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg_path(input)
        .args(["-f", "s16le", "-acodec", "pcm_s16le"])
        .args(["-ar", "16000", "-ac", "1"])
        .arg_path(&out_path)
        .error_msg(format!("ffmpeg failed on {}", input.display()))
        .run()?;

    let size = std::fs::metadata(&out_path)
        .with_context(|| format!("Failed to stat {}", out_path.display()))?
        .len();
    let duration_ms = size / (BYTES_PER_SAMPLE as u64) * 1000 / (SAMPLE_RATE_HZ as u64);

    Ok(ConvertedPcm {
        path: out_path,
        size,
        duration_ms,
    })
}
