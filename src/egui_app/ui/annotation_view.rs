use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{
    self, Frame, Margin, RichText, TextFormat, Ui,
    text::LayoutJob,
};

use crate::egui_app::view_model;
use crate::workflow::{Document, DocumentId};

impl DocuFlowApp {
    /// Annotateur work table: one row per document awaiting annotation.
    pub(super) fn render_annotation_table(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let rows = self.controller.ui.annotation_table.rows.clone();
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Documents pour annotation et correction");
            if rows.is_empty() {
                helpers::empty_state(ui, "Aucun document disponible pour annotation.");
                return;
            }
            let mut open = None;
            for row in &rows {
                helpers::list_row(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&row.title).color(palette.accent_blue).strong(),
                            );
                            helpers::muted_label(ui, &format!("ID : {}", row.short_id));
                            helpers::muted_label(
                                ui,
                                &format!("Extrait le {}", row.extracted_label),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Ouvrir").clicked() {
                                open = Some(row.id.clone());
                            }
                            ui.add_space(6.0);
                            // Fixed example figure, not a measurement.
                            helpers::badge_outline(ui, "1.33s");
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
                            helpers::badge(ui, row.status_label, row.status_fill, row.status_text);
                        });
                    });
                    ui.horizontal_wrapped(|ui| {
                        if let Some(tag) = &row.first_tag {
                            helpers::badge_outline(ui, &format!("🏷 {tag} (90 %)"));
                        }
                        if let Some(author) = &row.author {
                            helpers::badge_outline(ui, &format!("👤 {author} (95 %)"));
                        }
                        helpers::badge_outline(
                            ui,
                            &format!("📝 {} ({} %)", row.title, row.confidence_pct),
                        );
                    });
                });
                ui.add_space(6.0);
            }
            if let Some(id) = open {
                self.controller.open_annotation_page(id);
            }
        });
    }

    /// Full-screen annotation page, with the not-found fallback.
    pub(super) fn render_annotation_page(&mut self, ctx: &egui::Context, id: &DocumentId) {
        let palette = style::palette();
        let document = self.controller.document(id).cloned();

        egui::TopBottomPanel::top("annotation_header")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("← Retour").clicked() {
                        self.controller.close_annotation_page();
                    }
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Annotation du document")
                            .color(palette.text_primary)
                            .strong()
                            .size(16.0),
                    );
                    if document.is_some() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let label = if self.controller.ui.annotation_page.show_audit {
                                "Masquer l'audit"
                            } else {
                                "Afficher l'audit"
                            };
                            if ui.button(label).clicked() {
                                self.controller.toggle_annotation_audit();
                            }
                        });
                    }
                });
            });
        self.render_status(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(document) = document else {
                self.render_document_not_found(ui);
                return;
            };
            egui::ScrollArea::vertical()
                .id_salt("annotation_scroll")
                .show(ui, |ui| {
                    self.render_annotation_content(ui, &document);
                });
        });
    }

    fn render_document_not_found(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(
                RichText::new("Document non trouvé")
                    .color(palette.text_primary)
                    .strong()
                    .size(22.0),
            );
            ui.add_space(8.0);
            helpers::muted_label(ui, "Le document demandé n'existe pas dans le corpus de démonstration.");
            ui.add_space(14.0);
            if ui.button("← Retour au tableau de bord").clicked() {
                self.controller.close_annotation_page();
            }
        });
    }

    fn render_annotation_content(&mut self, ui: &mut Ui, document: &Document) {
        let palette = style::palette();

        helpers::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(document.display_title())
                        .color(palette.text_primary)
                        .strong()
                        .size(16.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    helpers::badge_outline(ui, &format!("ID : {}", document.id.short()));
                    ui.add_space(6.0);
                    let (label, fill, text) =
                        view_model::context_badge(document.metadata.category.as_deref());
                    helpers::badge(ui, label, fill, text);
                });
            });
        });
        ui.add_space(8.0);

        if self.controller.ui.annotation_page.show_audit {
            let rows = self.controller.recent_audit_rows(&document.id);
            helpers::card(ui, |ui| {
                helpers::card_title(ui, "Historique des modifications");
                if rows.is_empty() {
                    helpers::empty_state(ui, "Aucune entrée d'audit pour ce document.");
                }
                for row in &rows {
                    super::audit_panel::render_audit_row(ui, row, false);
                    ui.add_space(6.0);
                }
            });
            ui.add_space(8.0);
        }

        ui.columns(2, |columns| {
            {
                let ui = &mut columns[0];
                helpers::card(ui, |ui| {
                    helpers::card_title(ui, "Document à annoter");
                    Frame::new()
                        .fill(palette.bg_primary)
                        .corner_radius(4.0)
                        .inner_margin(Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.label(highlighted_content(document, palette.text_primary));
                        });
                });
            }
            {
                let ui = &mut columns[1];
                self.render_annotation_tools(ui, document);
            }
        });
    }

    fn render_annotation_tools(&mut self, ui: &mut Ui, document: &Document) {
        let palette = style::palette();
        helpers::card(ui, |ui| {
            helpers::card_title(ui, "Outils d'annotation");

            ui.label(RichText::new("Types d'entités").color(palette.text_primary));
            ui.horizontal_wrapped(|ui| {
                for (label, kind) in [
                    ("Société", crate::workflow::AnnotationKind::Entity),
                    ("Service", crate::workflow::AnnotationKind::Concept),
                    ("Durée", crate::workflow::AnnotationKind::Concept),
                    ("Montant", crate::workflow::AnnotationKind::Entity),
                    ("Modalité", crate::workflow::AnnotationKind::Relation),
                ] {
                    helpers::badge(
                        ui,
                        label,
                        view_model::kind_highlight(kind),
                        palette.text_primary,
                    );
                }
            });
            ui.add_space(10.0);

            ui.label(RichText::new("Annotations détectées").color(palette.text_primary));
            if document.annotations.is_empty() {
                helpers::empty_state(ui, "Aucune annotation suggérée pour ce document.");
            }
            let mut validate = None;
            let mut reject = None;
            for annotation in &document.annotations {
                let row = view_model::annotation_row(annotation);
                helpers::list_row(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("« {} » → {}", row.text, row.kind_label))
                                .color(palette.text_primary)
                                .size(13.0),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if row.reviewed {
                                ui.label(
                                    RichText::new("✓ Validé").color(palette.success).size(12.0),
                                );
                            } else {
                                if ui.small_button("Rejeter").clicked() {
                                    reject = Some(row.id.clone());
                                }
                                if ui.small_button("Valider").clicked() {
                                    validate = Some(row.id.clone());
                                }
                                ui.label(
                                    RichText::new("⚠ À valider")
                                        .color(palette.warning)
                                        .size(12.0),
                                );
                            }
                            ui.add_space(6.0);
                            helpers::muted_label(ui, &format!("{} %", row.confidence_pct));
                        });
                    });
                });
                ui.add_space(4.0);
            }
            if let Some(annotation_id) = validate {
                self.controller.validate_annotation(&document.id, &annotation_id);
            }
            if let Some(annotation_id) = reject {
                self.controller.reject_annotation(&document.id, &annotation_id);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Valider les annotations").clicked() {
                    self.controller.validate_all_annotations(&document.id);
                }
                if ui.button("Exporter").clicked() {
                    self.controller.export_annotations(&document.id);
                }
            });
        });
    }
}

/// Lay out the document content with annotated spans drawn on a colored
/// background, one text section per segment.
fn highlighted_content(document: &Document, text_color: egui::Color32) -> LayoutJob {
    let segments = view_model::content_segments(&document.content, &document.annotations);
    let mut job = LayoutJob::default();
    for segment in segments {
        let mut format = TextFormat {
            color: text_color,
            ..Default::default()
        };
        if let Some(highlight) = segment.highlight {
            format.background = highlight;
        }
        job.append(&segment.text, 0.0, format);
    }
    job
}
