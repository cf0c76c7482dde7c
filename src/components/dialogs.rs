// ============================================================================
// MODAL DIALOGS — text prompts and error messages
// ============================================================================
//
// Layout follows one pattern for every dialog:
//   - Accent-colored header strip with icon + title
//   - Body (prompt + text field, or message)
//   - Right-aligned footer buttons
// Enter confirms, Esc cancels.
// ============================================================================

use eframe::egui;
use egui::{Color32, Pos2, Rect, Rounding, Sense, Vec2};

// ============================================================================
// ACTIVE-DIALOG ENUM - at most one modal dialog is open at a time
// ============================================================================

/// Which operation a text prompt feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Crop,
    Brightness,
    Line,
}

impl PromptKind {
    pub fn prompt(&self) -> &'static str {
        match self {
            PromptKind::Crop => "Enter crop coordinates (x1,y1,x2,y2):",
            PromptKind::Brightness => "Enter brightness enhancement value:",
            PromptKind::Line => "Enter line parameters (x1,y1,x2,y2,width):",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            PromptKind::Crop => "10,10,50,50",
            PromptKind::Brightness => "1.5",
            PromptKind::Line => "0,0,100,100,3",
        }
    }
}

#[derive(Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Input(InputDialog),
    Message(MessageDialog),
}

impl ActiveDialog {
    /// Returns true if no dialog is currently open.
    pub fn is_none(&self) -> bool {
        matches!(self, ActiveDialog::None)
    }
}

/// Result returned by each dialog's `show()` method every frame.
#[derive(Debug, PartialEq)]
pub enum DialogResult<T> {
    /// Dialog is still open, no action needed this frame.
    Open,
    /// User confirmed.
    Ok(T),
    /// User dismissed the dialog.
    Cancel,
}

// ============================================================================
// SHARED DIALOG STYLING HELPERS
// ============================================================================

/// Colors extracted from the current egui visuals for dialog rendering.
pub(crate) struct DialogColors {
    pub accent: Color32,
    pub accent_faint: Color32,
    pub text_muted: Color32,
    pub error: Color32,
}

impl DialogColors {
    pub(crate) fn from_ctx(ctx: &egui::Context) -> Self {
        let v = ctx.style().visuals.clone();
        let accent = v.selection.stroke.color;
        let alpha = if v.dark_mode { 35 } else { 25 };
        let text_muted = if v.dark_mode {
            Color32::from_gray(160)
        } else {
            v.weak_text_color()
        };
        Self {
            accent,
            accent_faint: Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), alpha),
            text_muted,
            error: v.error_fg_color,
        }
    }
}

/// Paint the header bar with icon + title.
pub(crate) fn paint_dialog_header(
    ui: &mut egui::Ui,
    colors: &DialogColors,
    accent: Color32,
    icon: &str,
    title: &str,
) {
    let header_height = 32.0;
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), header_height),
        Sense::hover(),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::ZERO, colors.accent_faint);
    painter.rect_filled(
        Rect::from_min_size(rect.min, Vec2::new(3.0, header_height)),
        Rounding::ZERO,
        accent,
    );
    painter.text(
        Pos2::new(rect.min.x + 12.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        format!("{} {}", icon, title),
        egui::FontId::proportional(14.0),
        accent,
    );
}

/// Thin separator line using accent color (very faint).
pub(crate) fn accent_separator(ui: &mut egui::Ui, colors: &DialogColors) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 1.0), Sense::hover());
    ui.painter().rect_filled(rect, 0.0, colors.accent_faint);
}

fn accent_button(ui: &mut egui::Ui, colors: &DialogColors, label: &str) -> bool {
    let btn = egui::Button::new(
        egui::RichText::new(format!("  {}  ", label)).color(Color32::WHITE).strong(),
    )
    .fill(colors.accent);
    ui.add(btn).clicked()
}

/// Styled OK / Cancel footer. Returns (ok_clicked, cancel_clicked).
pub(crate) fn dialog_footer(ui: &mut egui::Ui, colors: &DialogColors) -> (bool, bool) {
    let mut ok = false;
    let mut cancel = false;
    ui.add_space(4.0);
    accent_separator(ui, colors);
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
            if accent_button(ui, colors, "OK") {
                ok = true;
            }
        });
    });
    (ok, cancel)
}

fn modal_window(id: &'static str) -> egui::Window<'static> {
    egui::Window::new(id)
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

// ============================================================================
// INPUT DIALOG
// ============================================================================

pub struct InputDialog {
    pub kind: PromptKind,
    pub text: String,
    focus_requested: bool,
}

impl InputDialog {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            text: String::new(),
            focus_requested: false,
        }
    }

    /// Returns `Ok(text)` on OK / Enter; `Cancel` on Cancel / Esc.
    pub fn show(&mut self, ctx: &egui::Context) -> DialogResult<String> {
        let mut result = DialogResult::Open;
        let colors = DialogColors::from_ctx(ctx);

        let enter = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));
        let esc = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));

        modal_window("dialog_input").show(ctx, |ui| {
            ui.set_min_width(320.0);
            paint_dialog_header(ui, &colors, colors.accent, "\u{270F}", "Input");
            ui.add_space(6.0);

            ui.label(self.kind.prompt());
            ui.add_space(2.0);
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.text)
                    .hint_text(self.kind.hint())
                    .desired_width(f32::INFINITY),
            );
            if !self.focus_requested {
                edit.request_focus();
                self.focus_requested = true;
            }
            ui.label(
                egui::RichText::new(format!("e.g. {}", self.kind.hint()))
                    .size(11.0)
                    .color(colors.text_muted),
            );

            let (ok, cancel) = dialog_footer(ui, &colors);
            if ok || enter {
                result = DialogResult::Ok(self.text.clone());
            }
            if cancel || esc {
                result = DialogResult::Cancel;
            }
        });
        result
    }
}

// ============================================================================
// MESSAGE DIALOG
// ============================================================================

pub struct MessageDialog {
    pub title: String,
    pub message: String,
}

impl MessageDialog {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResult<()> {
        let mut result = DialogResult::Open;
        let colors = DialogColors::from_ctx(ctx);

        let dismiss = ctx.input_mut(|i| {
            i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
        });

        modal_window("dialog_message").show(ctx, |ui| {
            ui.set_min_width(280.0);
            paint_dialog_header(ui, &colors, colors.error, "\u{26A0}", &self.title);
            ui.add_space(8.0);
            ui.label(self.message.as_str());
            ui.add_space(4.0);
            accent_separator(ui, &colors);
            ui.add_space(6.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if accent_button(ui, &colors, "OK") {
                    result = DialogResult::Ok(());
                }
            });
        });

        if dismiss {
            result = DialogResult::Ok(());
        }
        result
    }
}
