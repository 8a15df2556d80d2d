//! Convert command - batch audio-to-PCM conversion.

use anyhow::{bail, Result};
use std::path::Path;

use crate::audio;

/// Execute the convert command.
///
/// Per-file failures are tallied rather than aborting the batch; the
/// command fails (non-zero exit) iff any file failed.
pub fn cmd_convert(files: &[impl AsRef<Path>], output: Option<&Path>, dir: Option<&Path>) -> Result<()> {
    if output.is_some() && files.len() > 1 {
        bail!("-o/--output can only be used with a single input file");
    }

    audio::check_ffmpeg()?;

    let mut converted = 0usize;
    let mut failed = 0usize;

    for file in files {
        let input = file.as_ref();
        let out_path = audio::output_path(input, output, dir);
        println!(
            "Converting: {} -> {}",
            input.file_name().unwrap_or_default().to_string_lossy(),
            out_path.file_name().unwrap_or_default().to_string_lossy()
        );
        match audio::convert_to_pcm(input, output, dir) {
            Ok(pcm) => {
                println!(
                    "  OK: {} bytes ({:.1} KB, {}ms)",
                    pcm.size,
                    pcm.size as f64 / 1024.0,
                    pcm.duration_ms
                );
                converted += 1;
            }
            Err(e) => {
                eprintln!("  Error: {:#}", e);
                failed += 1;
            }
        }
    }

    println!("\nDone: {} converted, {} failed", converted, failed);
    if failed > 0 {
        bail!("{} file(s) failed to convert", failed);
    }
    Ok(())
}
