// ============================================================================
// CROP — cut a rectangle out of the image
// ============================================================================
//
// The box may reach past the image edges; uncovered pixels come out as
// transparent black so the result always has the requested size.
// ============================================================================

use image::{RgbaImage, imageops};

use super::params::CropRect;
use crate::error::{EditError, EditResult};

/// Largest crop side allowed beyond the source's own size.
pub const MAX_CROP_SIDE: u32 = 8_192;

/// Reject boxes bigger than the source and bigger than `MAX_CROP_SIDE`
/// on the same axis, so a typo cannot ask for gigabytes of pixels.
pub fn check_crop_size(img: &RgbaImage, rect: CropRect) -> EditResult<()> {
    let max_w = img.width().max(MAX_CROP_SIDE);
    let max_h = img.height().max(MAX_CROP_SIDE);
    if rect.width > max_w || rect.height > max_h {
        return Err(EditError::InvalidCoordinates);
    }
    Ok(())
}

/// Crop `img` to `rect`. Callers run `check_crop_size` first.
pub fn crop(img: &RgbaImage, rect: CropRect) -> RgbaImage {
    let (img_w, img_h) = (img.width() as i64, img.height() as i64);
    let (w, h) = (rect.width as i64, rect.height as i64);

    let inside = rect.x >= 0
        && rect.y >= 0
        && rect.x.saturating_add(w) <= img_w
        && rect.y.saturating_add(h) <= img_h;
    if inside {
        return imageops::crop_imm(img, rect.x as u32, rect.y as u32, rect.width, rect.height)
            .to_image();
    }

    let mut out = RgbaImage::new(rect.width, rect.height);
    // Only overlapping boxes are copied; their origin is within (-w, img_w)
    let overlaps = rect.x < img_w
        && rect.x.saturating_add(w) > 0
        && rect.y < img_h
        && rect.y.saturating_add(h) > 0;
    if overlaps {
        imageops::replace(&mut out, img, -rect.x, -rect.y);
    }
    out
}
