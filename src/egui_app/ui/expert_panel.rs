use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{self, RichText, Ui};

impl DocuFlowApp {
    /// Expert work table with per-row expandable audit history.
    pub(super) fn render_expert_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let rows = self.controller.ui.expert.rows.clone();
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Documents pour validation finale");
            if rows.is_empty() {
                helpers::empty_state(ui, "Aucun document disponible pour validation finale.");
                return;
            }
            let mut open = None;
            let mut toggle = None;
            for row in &rows {
                helpers::list_row(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&row.title).color(palette.accent_blue).strong(),
                            );
                            helpers::muted_label(ui, &format!("ID : {}", row.short_id));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Audit").clicked() {
                                toggle = Some(row.id.clone());
                            }
                            if ui.button("Valider").clicked() {
                                open = Some(row.id.clone());
                            }
                            ui.add_space(6.0);
                            if let Some(extension) = &row.extension {
                                helpers::badge_outline(ui, extension);
                                ui.add_space(6.0);
                            }
                            helpers::badge(
                                ui,
                                row.context_label,
                                row.context_fill,
                                row.context_text,
                            );
                            ui.add_space(6.0);
                            if let Some(category) = &row.category {
                                helpers::badge(
                                    ui,
                                    category,
                                    palette.bg_tertiary,
                                    palette.accent_blue,
                                );
                            }
                        });
                    });
                });
                if self.controller.expert_audit_expanded(&row.id) {
                    let audit_rows = self.controller.recent_audit_rows(&row.id);
                    ui.indent(("expert_audit", row.id.as_str()), |ui| {
                        ui.add_space(4.0);
                        helpers::muted_label(ui, "Historique récent");
                        for audit_row in &audit_rows {
                            super::audit_panel::render_audit_row(ui, audit_row, false);
                            ui.add_space(4.0);
                        }
                    });
                }
                ui.add_space(6.0);
            }
            if let Some(id) = toggle {
                self.controller.toggle_expert_audit(&id);
            }
            if let Some(id) = open {
                self.controller.open_annotation_page(id);
            }
        });
    }
}
