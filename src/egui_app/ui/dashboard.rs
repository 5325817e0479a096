use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{self, RichText, Ui};

/// Pipeline overview figures; hard-coded example constants, not computed.
const PLANNED_DOCUMENTS: usize = 150;
const REJECTED_DOCUMENTS: usize = 12;
const RESCRAPING_QUEUE: usize = 4;

impl DocuFlowApp {
    /// Stat cards, pipeline overview, and the role work queue.
    pub(super) fn render_dashboard(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let stats = self.controller.ui.dashboard.stats;

        ui.columns(3, |columns| {
            stat_card(&mut columns[0], "Total Documents", stats.total, palette.accent_blue);
            stat_card(&mut columns[1], "En cours", stats.pending, palette.warning);
            stat_card(&mut columns[2], "Terminés", stats.completed, palette.success);
        });
        ui.add_space(10.0);

        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Vue d'ensemble du pipeline");
            ui.horizontal(|ui| {
                pipeline_figure(ui, "Documents planifiés", PLANNED_DOCUMENTS);
                ui.separator();
                pipeline_figure(ui, "Rejetés", REJECTED_DOCUMENTS);
                ui.separator();
                pipeline_figure(ui, "File de rescraping", RESCRAPING_QUEUE);
            });
        });
        ui.add_space(10.0);

        let queue = self.controller.ui.dashboard.queue.clone();
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Documents nécessitant votre attention");
            if queue.is_empty() {
                helpers::empty_state(
                    ui,
                    "Aucun document ne nécessite votre attention pour le moment.",
                );
                return;
            }
            for row in &queue {
                helpers::list_row(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&row.filename)
                                    .color(palette.text_primary)
                                    .strong(),
                            );
                            helpers::muted_label(ui, &format!("Uploadé le {}", row.uploaded_label));
                            if row.title != row.filename {
                                helpers::muted_label(ui, &format!("Titre : {}", row.title));
                            }
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if row.confidence_pct > 0 {
                                helpers::badge_outline(
                                    ui,
                                    &format!("Confiance : {} %", row.confidence_pct),
                                );
                                ui.add_space(6.0);
                            }
                            helpers::badge(ui, row.status_label, row.status_fill, row.status_text);
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });
    }
}

fn stat_card(ui: &mut Ui, label: &str, value: usize, accent: egui::Color32) {
    let palette = style::palette();
    helpers::card(ui, |ui| {
        ui.label(RichText::new(label).color(palette.text_muted).size(12.0));
        ui.label(RichText::new(value.to_string()).color(accent).strong().size(26.0));
    });
}

fn pipeline_figure(ui: &mut Ui, label: &str, value: usize) {
    let palette = style::palette();
    ui.vertical(|ui| {
        ui.label(
            RichText::new(value.to_string())
                .color(palette.text_primary)
                .strong()
                .size(18.0),
        );
        helpers::muted_label(ui, label);
    });
}
