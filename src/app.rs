use crate::capture::{FrameGrabber, Webcam};
use crate::components::canvas::CanvasView;
use crate::components::dialogs::{ActiveDialog, DialogResult, InputDialog, MessageDialog, PromptKind};
use crate::config::AppConfig;
use crate::error::{EditError, EditResult};
use crate::io::{FileHandler, is_supported_image};
use crate::ops::Channel;
use crate::session::ImageSession;
use eframe::egui;
use std::path::{Path, PathBuf};

const CONTROL_PANEL_WIDTH: f32 = 170.0;
const BUTTON_SPACING: f32 = 5.0;

pub struct ImageBenchApp {
    config: AppConfig,

    // The one image and everything done to it
    session: ImageSession,

    // Canvas renderer (texture cache + scroll area)
    canvas: CanvasView,

    // Native open dialog
    file_handler: FileHandler,

    // Capture device; swapped for a fake in tests
    grabber: Box<dyn FrameGrabber>,

    /// Drop-down selection; `None` is the "None" entry.
    selected_channel: Option<Channel>,

    // Modal dialog system (at most one open at a time)
    active_dialog: ActiveDialog,

    /// File from the command line, opened on the first update() frame.
    pending_startup_file: Option<PathBuf>,
}

impl ImageBenchApp {
    pub fn new(config: AppConfig) -> Self {
        let grabber = Box::new(Webcam::new(config.camera_index));
        Self::with_grabber(config, grabber)
    }

    pub fn with_grabber(config: AppConfig, grabber: Box<dyn FrameGrabber>) -> Self {
        Self {
            file_handler: FileHandler::new(config.extensions.clone()),
            pending_startup_file: config.startup_file.clone(),
            config,
            session: ImageSession::new(),
            canvas: CanvasView::default(),
            grabber,
            selected_channel: None,
            active_dialog: ActiveDialog::None,
        }
    }

    pub fn session(&self) -> &ImageSession {
        &self.session
    }

    pub fn active_dialog(&self) -> &ActiveDialog {
        &self.active_dialog
    }

    pub fn set_selected_channel(&mut self, channel: Option<Channel>) {
        self.selected_channel = channel;
    }

    // ------------------------------------------------------------------------
    // Button handlers
    // ------------------------------------------------------------------------

    fn upload_image(&mut self) {
        if let Some(path) = self.file_handler.pick_image_path() {
            self.open_path(&path);
        }
    }

    pub fn open_path(&mut self, path: &Path) {
        if !is_supported_image(path) {
            log::warn!("{} has no recognised image extension, trying anyway", path.display());
        }
        let result = self.session.load_file(path);
        self.finish("upload", result);
    }

    pub fn capture_image(&mut self) {
        let result = self.session.capture(self.grabber.as_mut());
        if let Err(EditError::Capture(e)) = &result {
            log::error!("camera {}: {}", self.config.camera_index, e.detail());
        }
        self.finish("capture", result);
    }

    pub fn show_channel(&mut self) {
        let result = self.session.show_channel(self.selected_channel);
        self.finish("show channel", result);
    }

    /// Open the parameter prompt for `kind`, unless there is nothing to edit.
    pub fn request_prompt(&mut self, kind: PromptKind) {
        if !self.session.has_image() {
            self.report(EditError::NoImage);
            return;
        }
        self.active_dialog = ActiveDialog::Input(InputDialog::new(kind));
    }

    /// Apply the text typed into a prompt. Empty input is a no-op.
    pub fn apply_prompt(&mut self, kind: PromptKind, text: &str) {
        if text.trim().is_empty() {
            log::debug!("{:?} prompt submitted empty, ignoring", kind);
            return;
        }
        let color = self.config.line_color;
        let result = match kind {
            PromptKind::Crop => self.session.crop_from_str(text),
            PromptKind::Brightness => self.session.enhance_brightness_from_str(text),
            PromptKind::Line => self.session.draw_line_from_str(text, color),
        };
        self.finish(&format!("{:?}", kind).to_lowercase(), result);
    }

    fn finish(&mut self, what: &str, result: EditResult<()>) {
        match result {
            Ok(()) => {
                if let Some(img) = self.session.current() {
                    log::info!("{} ok, image now {}x{}", what, img.width(), img.height());
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: EditError) {
        log::warn!("{}", err);
        self.active_dialog = ActiveDialog::Message(MessageDialog::error(err.to_string()));
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let button_size = egui::vec2(ui.available_width(), 0.0);
        let button = |ui: &mut egui::Ui, label: &str| {
            ui.add_space(BUTTON_SPACING);
            ui.add_sized(button_size, egui::Button::new(label)).clicked()
        };

        if button(ui, "Upload Image") {
            self.upload_image();
        }
        if button(ui, "Capture from Webcam") {
            self.capture_image();
        }

        ui.add_space(BUTTON_SPACING);
        let selected = self.selected_channel.map_or("None", |c| c.label());
        egui::ComboBox::from_id_source("channel_combo")
            .width(ui.available_width())
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.selected_channel, None, "None");
                for ch in Channel::all() {
                    ui.selectable_value(&mut self.selected_channel, Some(*ch), ch.label());
                }
            });
        if button(ui, "Show Channel") {
            self.show_channel();
        }

        if button(ui, "Crop Image") {
            self.request_prompt(PromptKind::Crop);
        }
        if button(ui, "Enhance Brightness") {
            self.request_prompt(PromptKind::Brightness);
        }
        if button(ui, "Draw Line") {
            self.request_prompt(PromptKind::Line);
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match (self.session.current(), self.session.source()) {
                (Some(img), Some(src)) => {
                    ui.label(format!("{} × {}", img.width(), img.height()));
                    ui.separator();
                    ui.label(src.to_string());
                    if let crate::session::SessionView::Channel(ch) = self.session.view() {
                        ui.separator();
                        ui.label(format!("{} channel", ch.label()));
                    }
                }
                _ => {
                    ui.label("No image loaded");
                }
            }
            if let Some(path) = crate::logger::log_path() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("session log").on_hover_text(path.display().to_string());
                });
            }
        });
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let mut dialog = std::mem::take(&mut self.active_dialog);
        let mut submitted = None;
        let keep_open = match &mut dialog {
            ActiveDialog::None => false,
            ActiveDialog::Input(input) => match input.show(ctx) {
                DialogResult::Open => true,
                DialogResult::Ok(text) => {
                    submitted = Some((input.kind, text));
                    false
                }
                DialogResult::Cancel => false,
            },
            ActiveDialog::Message(msg) => msg.show(ctx) == DialogResult::Open,
        };
        if keep_open {
            self.active_dialog = dialog;
        }
        // Applied after the dialog closed so an error can open its own dialog
        if let Some((kind, text)) = submitted {
            self.apply_prompt(kind, &text);
        }
    }
}

impl eframe::App for ImageBenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.pending_startup_file.take() {
            self.open_path(&path);
        }

        if let Err(e) = self.canvas.sync(ctx, &self.session) {
            self.report(e);
        }

        let modal_open = !self.active_dialog.is_none();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status(ui);
        });

        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    self.show_controls(ui);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas.show(ui);
            });

        self.show_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptureError;
    use image::{Rgba, RgbaImage};

    struct FakeCamera(Option<RgbaImage>);

    impl FrameGrabber for FakeCamera {
        fn grab_frame(&mut self) -> Result<RgbaImage, CaptureError> {
            self.0
                .clone()
                .ok_or_else(|| CaptureError::Open("no device".to_string()))
        }

        fn device_index(&self) -> u32 {
            0
        }
    }

    fn app_with(frame: Option<RgbaImage>) -> ImageBenchApp {
        ImageBenchApp::with_grabber(AppConfig::default(), Box::new(FakeCamera(frame)))
    }

    fn error_text(app: &ImageBenchApp) -> Option<&str> {
        match app.active_dialog() {
            ActiveDialog::Message(m) => Some(m.message.as_str()),
            _ => None,
        }
    }

    #[test]
    fn prompt_without_image_shows_error_instead() {
        let mut app = app_with(None);
        app.request_prompt(PromptKind::Crop);
        assert_eq!(error_text(&app), Some("No image loaded."));
    }

    #[test]
    fn prompt_opens_when_image_present() {
        let mut app = app_with(Some(RgbaImage::new(10, 10)));
        app.capture_image();
        assert!(app.active_dialog().is_none());
        app.request_prompt(PromptKind::Line);
        assert!(matches!(app.active_dialog(), ActiveDialog::Input(d) if d.kind == PromptKind::Line));
    }

    #[test]
    fn capture_failure_reports_webcam_error() {
        let mut app = app_with(None);
        app.capture_image();
        assert_eq!(error_text(&app), Some("Could not open webcam."));
        assert!(!app.session().has_image());
    }

    #[test]
    fn crop_prompt_applies() {
        let mut app = app_with(Some(RgbaImage::from_pixel(100, 100, Rgba([1, 2, 3, 255]))));
        app.capture_image();
        app.apply_prompt(PromptKind::Crop, "10,10,50,50");
        assert!(app.active_dialog().is_none());
        assert_eq!(app.session().current().unwrap().dimensions(), (40, 40));
    }

    #[test]
    fn bad_prompt_text_keeps_image() {
        let mut app = app_with(Some(RgbaImage::from_pixel(20, 20, Rgba([1, 2, 3, 255]))));
        app.capture_image();
        let gen_before = app.session().generation();
        app.apply_prompt(PromptKind::Line, "1,2,3");
        assert_eq!(error_text(&app), Some("Invalid line parameters."));
        assert_eq!(app.session().generation(), gen_before);
        assert_eq!(app.session().current().unwrap().dimensions(), (20, 20));
    }

    #[test]
    fn empty_prompt_is_ignored() {
        let mut app = app_with(Some(RgbaImage::new(5, 5)));
        app.capture_image();
        let gen_before = app.session().generation();
        app.apply_prompt(PromptKind::Brightness, "   ");
        assert!(app.active_dialog().is_none());
        assert_eq!(app.session().generation(), gen_before);
    }

    #[test]
    fn show_channel_needs_selection() {
        let mut app = app_with(Some(RgbaImage::new(5, 5)));
        app.capture_image();
        app.show_channel();
        assert_eq!(error_text(&app), Some("No channel selected."));

        let mut app = app_with(Some(RgbaImage::new(5, 5)));
        app.capture_image();
        app.set_selected_channel(Some(Channel::Green));
        app.show_channel();
        assert!(app.active_dialog().is_none());
    }
}
