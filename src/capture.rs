// ============================================================================
// WEBCAM CAPTURE — one frame per call, device released immediately
// ============================================================================

use image::{RgbImage, RgbaImage};
use nokhwa::Camera;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};

use crate::error::CaptureError;

/// Anything that can hand out a single still frame.
pub trait FrameGrabber {
    fn grab_frame(&mut self) -> Result<RgbaImage, CaptureError>;

    /// Device index reported in the status bar and log.
    fn device_index(&self) -> u32;
}

/// Local webcam accessed through nokhwa's native backend.
#[derive(Debug, Clone, Copy)]
pub struct Webcam {
    pub index: u32,
}

impl Webcam {
    pub fn new(index: u32) -> Self {
        Self { index }
    }
}

impl FrameGrabber for Webcam {
    fn grab_frame(&mut self) -> Result<RgbaImage, CaptureError> {
        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(self.index), format)
            .map_err(|e| CaptureError::Open(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| CaptureError::Open(e.to_string()))?;

        let frame = camera.frame();
        if let Err(e) = camera.stop_stream() {
            log::warn!("camera {} stop stream failed: {e}", self.index);
        }
        drop(camera);

        let buffer = frame.map_err(|e| CaptureError::Frame(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CaptureError::Frame(e.to_string()))?;

        // nokhwa may link a different `image` release; go through raw bytes
        let (w, h) = (decoded.width(), decoded.height());
        let rgb = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| CaptureError::Frame(format!("bad frame buffer {w}x{h}")))?;
        log::info!("captured {w}x{h} frame from camera {}", self.index);
        Ok(rgb_to_rgba(&rgb))
    }

    fn device_index(&self) -> u32 {
        self.index
    }
}

/// Widen an RGB frame to opaque RGBA.
pub fn rgb_to_rgba(rgb: &RgbImage) -> RgbaImage {
    image::DynamicImage::ImageRgb8(rgb.clone()).to_rgba8()
}
