// ============================================================================
// ImageBench CLI — launch options
// ============================================================================
//
// Usage examples:
//   imagebench                      (empty canvas)
//   imagebench photo.png            (open photo.png on startup)
//   imagebench --camera 1           (capture from the second webcam)

use std::path::PathBuf;

use clap::Parser;

/// ImageBench: load or capture an image and apply quick edits.
#[derive(Parser, Debug, Default)]
#[command(name = "imagebench", about = "Load or capture an image and apply quick edits")]
pub struct CliArgs {
    /// Image file to open on startup.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Webcam device index used by "Capture from Webcam".
    #[arg(short, long, default_value_t = 0, value_name = "INDEX")]
    pub camera: u32,

    /// Write debug-level entries to the session log.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
