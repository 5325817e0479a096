use super::style;
use eframe::egui::{Color32, Frame, Margin, RichText, Ui};

/// Pill badge with a filled background.
pub(super) fn badge(ui: &mut Ui, text: &str, fill: Color32, text_color: Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(text_color).size(12.0));
        });
}

/// Outlined badge without a fill.
pub(super) fn badge_outline(ui: &mut Ui, text: &str) {
    let palette = style::palette();
    Frame::new()
        .stroke(style::outer_border())
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(palette.text_muted).size(12.0));
        });
}

/// Card container used for every panel section.
pub(super) fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::outer_border())
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Centered placeholder for empty lists.
pub(super) fn empty_state(ui: &mut Ui, message: &str) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(message).color(palette.text_muted));
        ui.add_space(24.0);
    });
}

/// Section heading inside a card.
pub(super) fn card_title(ui: &mut Ui, title: &str) {
    let palette = style::palette();
    ui.label(RichText::new(title).color(palette.text_primary).strong().size(16.0));
    ui.add_space(8.0);
}

/// Muted single-line caption.
pub(super) fn muted_label(ui: &mut Ui, text: &str) {
    let palette = style::palette();
    ui.label(RichText::new(text).color(palette.text_muted).size(12.0));
}

/// Row container with a subtle fill, used for list entries.
pub(super) fn list_row<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(style::row_fill())
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}
