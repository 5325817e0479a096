//! egui renderer for the application UI.

use eframe::egui;

use crate::egui_app::controller::DocuFlowController;
use crate::egui_app::state::Screen;

mod annotation_view;
mod audit_panel;
mod chrome;
mod dashboard;
mod expert_panel;
mod helpers;
mod landing;
mod metadata_panel;
mod style;

/// Minimum viewport size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(1080.0, 700.0);

/// Renders the egui UI using the shared controller state.
pub struct DocuFlowApp {
    controller: DocuFlowController,
    visuals_set: bool,
}

impl DocuFlowApp {
    /// Create the app and load persisted settings.
    pub fn new() -> Self {
        let mut controller = DocuFlowController::new();
        controller.load_settings();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl Default for DocuFlowApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for DocuFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        match self.controller.ui.screen.clone() {
            Screen::Landing => self.render_landing(ctx),
            Screen::Workspace => self.render_workspace(ctx),
            Screen::Annotation { document } => self.render_annotation_page(ctx, &document),
        }
    }
}
