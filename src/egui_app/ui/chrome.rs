use super::style;
use super::{DocuFlowApp, helpers};
use crate::egui_app::state::WorkspaceTab;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

impl DocuFlowApp {
    /// Workspace layout: header, tab bar, status footer, active view.
    pub(super) fn render_workspace(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        self.render_tab_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("workspace_scroll")
                .show(ui, |ui| match self.controller.ui.active_tab {
                    WorkspaceTab::Dashboard => self.render_dashboard(ui),
                    WorkspaceTab::Metadata => self.render_metadata_panel(ui),
                    WorkspaceTab::Annotation => self.render_annotation_table(ui),
                    WorkspaceTab::Validation => self.render_expert_panel(ui),
                    WorkspaceTab::Audit => self.render_audit_panel(ui),
                });
        });
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("DocuFlow")
                            .color(palette.accent_blue)
                            .strong()
                            .size(18.0),
                    );
                    ui.add_space(6.0);
                    helpers::muted_label(ui, "Plateforme d'Extraction & Validation");
                    if let Some(user) = self.controller.current_user().cloned() {
                        ui.add_space(10.0);
                        let (fill, text) = role_badge_colors(user.role);
                        helpers::badge(ui, user.role.label(), fill, text);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Déconnexion").clicked() {
                                self.controller.logout();
                            }
                            ui.add_space(8.0);
                            ui.label(RichText::new(&user.name).color(palette.text_primary));
                        });
                    }
                });
            });
    }

    fn render_tab_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let tabs = self.controller.tabs();
        let active = self.controller.ui.active_tab;
        egui::TopBottomPanel::top("tab_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mut selected = None;
                    for tab in &tabs {
                        let is_active = *tab == active;
                        let label = if is_active {
                            RichText::new(tab.label()).color(palette.accent_blue).strong()
                        } else {
                            RichText::new(tab.label()).color(palette.text_muted)
                        };
                        if ui.selectable_label(is_active, label).clicked() {
                            selected = Some(*tab);
                        }
                        ui.add_space(10.0);
                    }
                    if let Some(tab) = selected {
                        self.controller.select_tab(tab);
                    }
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 2.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        2.0,
                        style::outer_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }
}

/// Role badge colors, one literal pair per role.
pub(super) fn role_badge_colors(
    role: crate::workflow::UserRole,
) -> (egui::Color32, egui::Color32) {
    use crate::workflow::UserRole;
    match role {
        UserRole::Metadonneur => (
            egui::Color32::from_rgb(30, 52, 84),
            egui::Color32::from_rgb(140, 185, 255),
        ),
        UserRole::Annotateur => (
            egui::Color32::from_rgb(30, 66, 44),
            egui::Color32::from_rgb(150, 215, 170),
        ),
        UserRole::Expert => (
            egui::Color32::from_rgb(56, 40, 80),
            egui::Color32::from_rgb(200, 165, 255),
        ),
    }
}
