// ============================================================================
// CANVAS VIEW — current image at 1:1 inside a scrollable grey area
// ============================================================================

use eframe::egui;
use egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use image::RgbaImage;

use crate::error::{EditError, EditResult};
use crate::session::ImageSession;

/// Canvas background, matching a plain grey canvas widget.
pub const CANVAS_BG: Color32 = Color32::from_rgb(128, 128, 128);

pub(crate) fn rgba_to_color_image(img: &RgbaImage) -> ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, img.as_raw())
}

/// Reject bitmaps the GPU backend cannot hold in a single texture.
pub fn check_texture_size(width: u32, height: u32, max_side: usize) -> EditResult<()> {
    if width as usize > max_side || height as usize > max_side {
        return Err(EditError::TooLargeToDisplay {
            width,
            height,
            max: max_side,
        });
    }
    Ok(())
}

#[derive(Default)]
pub struct CanvasView {
    texture: Option<TextureHandle>,
    /// Session generation the texture was built from.
    built_generation: Option<u64>,
}

impl CanvasView {
    /// Re-upload the texture if the session changed since the last frame.
    ///
    /// An image over the backend's texture limit is not uploaded; the error
    /// is returned once per generation and the canvas shows the placeholder.
    pub fn sync(&mut self, ctx: &egui::Context, session: &ImageSession) -> EditResult<()> {
        let generation = session.generation();
        if self.built_generation == Some(generation) {
            return Ok(());
        }
        self.built_generation = Some(generation);
        self.texture = None;
        let Some(img) = session.view_image() else {
            return Ok(());
        };
        let max_side = ctx.input(|i| i.max_texture_side);
        check_texture_size(img.width(), img.height(), max_side)?;
        log::debug!("uploading {}x{} canvas texture", img.width(), img.height());
        self.texture = Some(ctx.load_texture(
            "canvas_image",
            rgba_to_color_image(&img),
            TextureOptions::NEAREST,
        ));
        Ok(())
    }

    /// Draw the canvas. Call [`CanvasView::sync`] first in the same frame.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        ui.painter().rect_filled(rect, 0.0, CANVAS_BG);

        egui::ScrollArea::both()
            .id_source("canvas_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| match &self.texture {
                Some(tex) => {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(tex))
                            .fit_to_original_size(1.0),
                    );
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new("Upload an image or capture one from the webcam")
                                .color(Color32::from_gray(220)),
                        );
                    });
                }
            });
    }
}
