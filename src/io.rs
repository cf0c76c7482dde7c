use image::RgbaImage;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

use crate::error::{EditError, EditResult};

/// Raster formats offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Returns true if `path` has one of the accepted raster extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
}

/// Decode an image file to RGBA.
pub fn load_image(path: &Path) -> EditResult<RgbaImage> {
    let img = image::open(path).map_err(|source| EditError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

// ============================================================================
// FILE HANDLER
// ============================================================================

pub struct FileHandler {
    /// Directory the last picked file lived in; the next dialog starts there.
    pub last_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl FileHandler {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            last_dir: None,
            extensions,
        }
    }

    /// Show the native open dialog. `None` when the user cancels.
    pub fn pick_image_path(&mut self) -> Option<PathBuf> {
        let exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let mut dialog = FileDialog::new()
            .set_title("Open Image")
            .add_filter("Image files", &exts)
            .add_filter("All Files", &["*"]);
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }
        let path = dialog.pick_file()?;
        self.last_dir = path.parent().map(Path::to_path_buf);
        Some(path)
    }
}
