use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{self, ComboBox, ProgressBar, RichText, TextEdit, Ui};

use crate::egui_app::view_model;

/// Literal per-field confidence figures shown in the quality sidebar.
const FIELD_CONFIDENCES: [(&str, u8); 8] = [
    ("Titre du document", 98),
    ("Type de document", 70),
    ("Contexte du document", 85),
    ("Langue", 90),
    ("Date de publication", 100),
    ("Source", 95),
    ("Version", 0),
    ("URL source", 85),
];

/// Literal "auto-extracted fields" badge row.
const EXTRACTED_FIELDS: [&str; 6] = ["Title", "Date", "Language", "Country", "Source", "Version"];

/// Fixed extraction rate shown in the sidebar gauge.
const EXTRACTION_RATE: f32 = 0.83;

impl DocuFlowApp {
    /// Metadata validation: document list, then editor + quality sidebar.
    pub(super) fn render_metadata_panel(&mut self, ui: &mut Ui) {
        match self.controller.ui.metadata.selected.clone() {
            None => self.render_metadata_list(ui),
            Some(id) => self.render_metadata_editor(ui, &id),
        }
    }

    fn render_metadata_list(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let pending = self.controller.ui.metadata.pending.clone();
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Documents nécessitant une validation des métadonnées");
            if pending.is_empty() {
                helpers::empty_state(ui, "Aucun document en attente de validation.");
                return;
            }
            let mut open = None;
            for row in &pending {
                let response = helpers::list_row(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&row.filename)
                                    .color(palette.text_primary)
                                    .strong(),
                            );
                            helpers::muted_label(
                                ui,
                                &format!("Extrait le {}", row.extracted_label),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            helpers::badge_outline(
                                ui,
                                &format!("Confiance : {} %", row.confidence_pct),
                            );
                        });
                    });
                    ui.interact(
                        ui.min_rect(),
                        ui.id().with(row.id.as_str()),
                        egui::Sense::click(),
                    )
                });
                if response.clicked() {
                    open = Some(row.id.clone());
                }
                ui.add_space(6.0);
            }
            if let Some(id) = open {
                self.controller.open_metadata_editor(id);
            }
        });
    }

    fn render_metadata_editor(&mut self, ui: &mut Ui, id: &crate::workflow::DocumentId) {
        let palette = style::palette();
        let document = self.controller.document(id).cloned();
        ui.columns(2, |columns| {
            {
                let ui = &mut columns[0];
                helpers::card(ui, |ui| {
                    helpers::card_title(ui, "Métadonnées du Document");
                    self.render_metadata_form(ui);
                    ui.add_space(10.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Retour").clicked() {
                            self.controller.close_metadata_editor();
                        }
                        if ui.button("Sauvegarder").clicked() {
                            self.controller.save_metadata();
                        }
                        if ui.button("Réextraire").clicked() {
                            self.controller.reextract_metadata();
                        }
                    });
                });
                ui.add_space(10.0);
                if let Some(doc) = &document {
                    helpers::card(ui, |ui| {
                        helpers::card_title(ui, "Audit Trail & Traçabilité");
                        let mut entries: Vec<_> = doc.audit_trail.iter().collect();
                        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                        for entry in entries {
                            let row = view_model::audit_row(&doc.filename, entry);
                            super::audit_panel::render_audit_row(ui, &row, false);
                            ui.add_space(6.0);
                        }
                    });
                }
            }
            {
                let ui = &mut columns[1];
                helpers::card(ui, |ui| {
                    helpers::card_title(ui, "Qualité d'Extraction");
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Taux d'extraction :").color(palette.text_primary));
                        ui.label(
                            RichText::new("83 %")
                                .color(palette.text_primary)
                                .strong()
                                .size(20.0),
                        );
                    });
                    ui.add(ProgressBar::new(EXTRACTION_RATE).show_percentage());
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("Champs extraits automatiquement :")
                            .color(palette.text_primary),
                    );
                    ui.horizontal_wrapped(|ui| {
                        for field in EXTRACTED_FIELDS {
                            helpers::badge(
                                ui,
                                field,
                                palette.bg_tertiary,
                                palette.accent_blue,
                            );
                        }
                    });
                    ui.add_space(10.0);
                    ui.label(RichText::new("Scores de confiance :").color(palette.text_primary));
                    for (label, pct) in FIELD_CONFIDENCES {
                        ui.horizontal(|ui| {
                            helpers::muted_label(ui, &format!("{label} :"));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("{pct} %"))
                                            .color(view_model::confidence_color(pct)),
                                    );
                                },
                            );
                        });
                    }
                });
                ui.add_space(10.0);
                if let Some(doc) = &document {
                    helpers::card(ui, |ui| {
                        helpers::card_title(ui, "Extraction Automatique");
                        sidebar_fact(ui, "Titre", doc.metadata.title.as_deref().unwrap_or("—"));
                        sidebar_fact(
                            ui,
                            "Date",
                            &view_model::format_date(doc.metadata.extracted_at),
                        );
                        sidebar_fact(
                            ui,
                            "Catégorie",
                            doc.metadata.category.as_deref().unwrap_or("—"),
                        );
                    });
                }
            }
        });
    }

    fn render_metadata_form(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let form = &mut self.controller.ui.metadata.form;
        egui::Grid::new("metadata_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Titre du document").color(palette.text_primary));
                ui.add(TextEdit::singleline(&mut form.title).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label(RichText::new("Type de document").color(palette.text_primary));
                ComboBox::from_id_salt("metadata_type")
                    .selected_text(form.document_type.clone())
                    .show_ui(ui, |ui| {
                        for option in ["Guideline", "Rapport", "Contrat"] {
                            ui.selectable_value(&mut form.document_type, option.into(), option);
                        }
                    });
                ui.end_row();

                ui.label(RichText::new("Contexte du document").color(palette.text_primary));
                ComboBox::from_id_salt("metadata_context")
                    .selected_text(form.document_context.clone())
                    .show_ui(ui, |ui| {
                        for option in [
                            "Réglementation pharmaceutique",
                            "Contrat commercial",
                            "Documentation technique",
                            "Rapport d'étude",
                        ] {
                            ui.selectable_value(&mut form.document_context, option.into(), option);
                        }
                    });
                ui.end_row();

                ui.label(RichText::new("Langue").color(palette.text_primary));
                ComboBox::from_id_salt("metadata_language")
                    .selected_text(form.language.clone())
                    .show_ui(ui, |ui| {
                        for option in ["Anglais", "Français", "Espagnol"] {
                            ui.selectable_value(&mut form.language, option.into(), option);
                        }
                    });
                ui.end_row();

                ui.label(RichText::new("Date de publication").color(palette.text_primary));
                ui.add(TextEdit::singleline(&mut form.publication_date));
                ui.end_row();

                ui.label(RichText::new("Source").color(palette.text_primary));
                ComboBox::from_id_salt("metadata_source")
                    .selected_text(form.source.clone())
                    .show_ui(ui, |ui| {
                        for option in ["EMA", "FDA", "Autre"] {
                            ui.selectable_value(&mut form.source, option.into(), option);
                        }
                    });
                ui.end_row();

                ui.label(RichText::new("Version").color(palette.text_primary));
                ui.add(TextEdit::singleline(&mut form.version));
                ui.end_row();

                ui.label(RichText::new("URL source").color(palette.text_primary));
                ui.add(TextEdit::singleline(&mut form.source_url).desired_width(f32::INFINITY));
                ui.end_row();
            });
        helpers::muted_label(
            ui,
            "Valeurs d'exemple pré-remplies ; les modifications ne sont pas conservées.",
        );
    }
}

fn sidebar_fact(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label} :")).color(palette.text_muted).size(12.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).color(palette.text_primary).size(12.0));
        });
    });
}
