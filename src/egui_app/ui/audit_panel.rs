use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{ComboBox, Frame, Margin, RichText, TextEdit, Ui};

use crate::egui_app::state::AuditRowView;

impl DocuFlowApp {
    /// Flattened audit journal with fuzzy search and a document selector.
    pub(super) fn render_audit_panel(&mut self, ui: &mut Ui) {
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Journal d'audit et traçabilité");

            let mut filter_changed = false;
            ui.horizontal(|ui| {
                let search = ui.add(
                    TextEdit::singleline(&mut self.controller.ui.audit.search_query)
                        .hint_text("Rechercher dans l'historique...")
                        .desired_width(260.0),
                );
                if search.changed() {
                    filter_changed = true;
                }

                let options = self.controller.document_filter_options();
                let mut selected = self.controller.ui.audit.document_filter.clone();
                let selected_label = selected
                    .as_ref()
                    .and_then(|id| {
                        options
                            .iter()
                            .find(|(candidate, _)| candidate == id)
                            .map(|(_, name)| name.clone())
                    })
                    .unwrap_or_else(|| "Tous les documents".into());
                ComboBox::from_id_salt("audit_document_filter")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(selected.is_none(), "Tous les documents")
                            .clicked()
                        {
                            selected = None;
                            filter_changed = true;
                        }
                        for (id, name) in &options {
                            let is_selected = selected.as_ref() == Some(id);
                            if ui.selectable_label(is_selected, name).clicked() {
                                selected = Some(id.clone());
                                filter_changed = true;
                            }
                        }
                    });
                if filter_changed {
                    self.controller.set_audit_document_filter(selected);
                }
            });
            ui.add_space(10.0);

            let rows = self.controller.ui.audit.rows.clone();
            if rows.is_empty() {
                helpers::empty_state(ui, "Aucune entrée d'audit trouvée.");
                return;
            }
            for row in &rows {
                render_audit_row(ui, row, true);
                ui.add_space(6.0);
            }
        });
    }
}

/// One audit entry: action badge, detail line, actor and timestamp, and the
/// optional before/after snapshot block.
pub(super) fn render_audit_row(ui: &mut Ui, row: &AuditRowView, show_document: bool) {
    let palette = style::palette();
    helpers::list_row(ui, |ui| {
        ui.horizontal(|ui| {
            helpers::badge(ui, &row.action, row.action_fill, row.action_text);
            if show_document {
                ui.add_space(6.0);
                helpers::muted_label(ui, &row.document_name);
            }
        });
        ui.label(RichText::new(&row.details).color(palette.text_primary));
        ui.horizontal(|ui| {
            helpers::muted_label(ui, &row.actor);
            ui.separator();
            helpers::muted_label(ui, &row.timestamp_label);
        });
        if row.previous_value.is_some() || row.new_value.is_some() {
            Frame::new()
                .fill(palette.bg_primary)
                .corner_radius(4.0)
                .inner_margin(Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    if let Some(previous) = &row.previous_value {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Avant :").color(palette.destructive).size(12.0),
                            );
                            ui.label(
                                RichText::new(previous).color(palette.text_muted).size(12.0),
                            );
                        });
                    }
                    if let Some(new_value) = &row.new_value {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Après :").color(palette.success).size(12.0));
                            ui.label(
                                RichText::new(new_value).color(palette.text_muted).size(12.0),
                            );
                        });
                    }
                });
        }
    });
}
