//! The one image the application works on, and every operation on it.
//!
//! `ImageSession` is GUI-free so its behaviour can be tested directly. Each
//! operation either succeeds and bumps [`ImageSession::generation`], or
//! returns an [`EditError`] and leaves the session exactly as it was.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};

use crate::capture::FrameGrabber;
use crate::error::{EditError, EditResult};
use crate::io;
use crate::ops::{self, Channel, CropRect, LineParams};

/// Where the current image came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Webcam(u32),
    Memory,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(p) => write!(f, "{}", p.display()),
            ImageSource::Webcam(i) => write!(f, "webcam {}", i),
            ImageSource::Memory => write!(f, "memory"),
        }
    }
}

/// What the canvas currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionView {
    #[default]
    Full,
    Channel(Channel),
}

#[derive(Default)]
pub struct ImageSession {
    current: Option<RgbaImage>,
    source: Option<ImageSource>,
    view: SessionView,
    generation: u64,
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&RgbaImage> {
        self.current.as_ref()
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn view(&self) -> SessionView {
        self.view
    }

    /// Incremented on every change to what should be displayed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The bitmap to display: the full image, or the selected channel plane
    /// expanded to grey RGBA.
    pub fn view_image(&self) -> Option<Cow<'_, RgbaImage>> {
        let img = self.current.as_ref()?;
        Some(match self.view {
            SessionView::Full => Cow::Borrowed(img),
            SessionView::Channel(ch) => {
                let plane = ops::channels::extract_channel(img, ch);
                Cow::Owned(DynamicImage::ImageLuma8(plane).to_rgba8())
            }
        })
    }

    /// Replace the current image wholesale.
    pub fn set_image(&mut self, img: RgbaImage, source: ImageSource) {
        self.current = Some(img);
        self.source = Some(source);
        self.view = SessionView::Full;
        self.generation += 1;
    }

    pub fn load_file(&mut self, path: &Path) -> EditResult<()> {
        let img = io::load_image(path)?;
        log::info!("loaded {} ({}x{})", path.display(), img.width(), img.height());
        self.set_image(img, ImageSource::File(path.to_path_buf()));
        Ok(())
    }

    pub fn capture(&mut self, grabber: &mut dyn FrameGrabber) -> EditResult<()> {
        let img = grabber.grab_frame()?;
        self.set_image(img, ImageSource::Webcam(grabber.device_index()));
        Ok(())
    }

    /// Show one channel plane. Display only; the colour image is kept.
    pub fn show_channel(&mut self, channel: Option<Channel>) -> EditResult<()> {
        self.require_image()?;
        let channel = channel.ok_or(EditError::NoChannelSelected)?;
        self.view = SessionView::Channel(channel);
        self.generation += 1;
        Ok(())
    }

    pub fn crop(&mut self, rect: CropRect) -> EditResult<()> {
        let img = self.require_image()?;
        if rect.width == 0 || rect.height == 0 {
            return Err(EditError::InvalidCoordinates);
        }
        ops::crop::check_crop_size(img, rect)?;
        let cropped = ops::crop::crop(img, rect);
        self.current = Some(cropped);
        self.touch();
        Ok(())
    }

    pub fn enhance_brightness(&mut self, factor: f32) -> EditResult<()> {
        self.require_image()?;
        if !factor.is_finite() {
            return Err(EditError::InvalidBrightness);
        }
        if let Some(img) = self.current.as_mut() {
            ops::adjustments::enhance_brightness(img, factor);
        }
        self.touch();
        Ok(())
    }

    pub fn draw_line(&mut self, params: LineParams, color: Rgba<u8>) -> EditResult<()> {
        self.require_image()?;
        if let Some(img) = self.current.as_mut() {
            ops::shapes::draw_line(img, params, color);
        }
        self.touch();
        Ok(())
    }

    /// Text-input variants: parse first, so malformed input never reaches
    /// the image.
    pub fn crop_from_str(&mut self, input: &str) -> EditResult<()> {
        self.require_image()?;
        self.crop(ops::params::parse_crop_rect(input)?)
    }

    pub fn enhance_brightness_from_str(&mut self, input: &str) -> EditResult<()> {
        self.require_image()?;
        self.enhance_brightness(ops::params::parse_brightness(input)?)
    }

    pub fn draw_line_from_str(&mut self, input: &str, color: Rgba<u8>) -> EditResult<()> {
        self.require_image()?;
        self.draw_line(ops::params::parse_line_params(input)?, color)
    }

    fn require_image(&self) -> EditResult<&RgbaImage> {
        self.current.as_ref().ok_or(EditError::NoImage)
    }

    /// An edit landed: back to the full-colour view.
    fn touch(&mut self) {
        self.view = SessionView::Full;
        self.generation += 1;
    }
}
