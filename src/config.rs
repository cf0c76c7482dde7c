use std::path::PathBuf;

use image::Rgba;

use crate::cli::CliArgs;
use crate::io::IMAGE_EXTENSIONS;
use crate::ops::shapes::LINE_GREEN;

/// Resolved runtime settings. Built once at startup, never persisted.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub camera_index: u32,
    pub line_color: Rgba<u8>,
    pub extensions: Vec<String>,
    pub startup_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Image Processing App".to_string(),
            window_size: [800.0, 600.0],
            camera_index: 0,
            line_color: LINE_GREEN,
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            startup_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            camera_index: args.camera,
            startup_file: args.file.clone(),
            ..Self::default()
        }
    }
}
