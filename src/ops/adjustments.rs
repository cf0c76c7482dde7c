// ============================================================================
// ADJUSTMENT OPERATIONS — pixel-level image adjustments
// ============================================================================
//
// Operations run row-parallel via rayon and modify the image in place.
// ============================================================================

use image::RgbaImage;
use rayon::prelude::*;

/// Apply a per-pixel transform to every pixel of `img`.
/// `transform` receives (r, g, b, a) as f32 and returns (r, g, b, a) as f32;
/// results are clamped to 0..=255 and truncated toward zero.
fn apply_pixel_transform<F>(img: &mut RgbaImage, transform: F)
where
    F: Fn(f32, f32, f32, f32) -> (f32, f32, f32, f32) + Sync,
{
    let stride = img.width() as usize * 4;
    if stride == 0 || img.height() == 0 {
        return;
    }

    let raw: &mut [u8] = &mut *img;
    raw.par_chunks_mut(stride).for_each(|row| {
        for px in row.chunks_exact_mut(4) {
            let (nr, ng, nb, na) =
                transform(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32);
            px[0] = nr.clamp(0.0, 255.0) as u8;
            px[1] = ng.clamp(0.0, 255.0) as u8;
            px[2] = nb.clamp(0.0, 255.0) as u8;
            px[3] = na.clamp(0.0, 255.0) as u8;
        }
    });
}

/// Brightness enhancement: multiply R, G and B by `factor`.
/// 1.0 leaves the image unchanged, 0.0 yields black. Alpha is preserved.
pub fn enhance_brightness(img: &mut RgbaImage, factor: f32) {
    apply_pixel_transform(img, |r, g, b, a| (r * factor, g * factor, b * factor, a));
}
