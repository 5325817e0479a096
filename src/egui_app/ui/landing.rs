use super::style;
use super::{DocuFlowApp, helpers};
use eframe::egui::{self, Frame, Key, Margin, RichText, TextEdit};

impl DocuFlowApp {
    /// Marketing landing page with the login card.
    pub(super) fn render_landing(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("landing_scroll")
                    .show(ui, |ui| {
                        ui.add_space(18.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("DocuFlow")
                                    .color(palette.accent_blue)
                                    .strong()
                                    .size(26.0),
                            );
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new("Plateforme d'Extraction & Validation")
                                    .color(palette.text_primary)
                                    .strong()
                                    .size(32.0),
                            );
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new(
                                    "Automatisez l'extraction de métadonnées et la validation de \
                                     vos documents avec notre solution IA avancée.",
                                )
                                .color(palette.text_muted)
                                .size(15.0),
                            );
                        });
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(420.0);
                            self.render_login_card(ui);
                        });
                        ui.add_space(28.0);
                        render_features(ui);
                        ui.add_space(18.0);
                        ui.vertical_centered(|ui| {
                            helpers::muted_label(ui, "© 2024 DocuFlow. Tous droits réservés.");
                        });
                    });
            });
    }

    fn render_login_card(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        helpers::card(ui, |ui| {
            ui.vertical_centered(|ui| {
                helpers::card_title(ui, "Connexion");
            });
            ui.label(RichText::new("Email").color(palette.text_primary));
            ui.add(
                TextEdit::singleline(&mut self.controller.ui.login.email)
                    .hint_text("votre@email.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.label(RichText::new("Mot de passe").color(palette.text_primary));
            let password_response = ui.add(
                TextEdit::singleline(&mut self.controller.ui.login.password)
                    .password(true)
                    .hint_text("••••••••")
                    .desired_width(f32::INFINITY),
            );
            if let Some(error) = self.controller.ui.login.error.clone() {
                ui.add_space(6.0);
                ui.label(RichText::new(error).color(palette.destructive));
            }
            ui.add_space(10.0);
            let submit_via_keyboard =
                password_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let clicked = ui
                .add_sized(
                    egui::vec2(ui.available_width(), 30.0),
                    egui::Button::new(RichText::new("Se connecter →").strong()),
                )
                .clicked();
            if clicked || submit_via_keyboard {
                self.controller.submit_login();
            }

            if self.controller.ui.login.show_demo_accounts {
                ui.add_space(12.0);
                Frame::new()
                    .fill(style::row_fill())
                    .corner_radius(4.0)
                    .inner_margin(Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Comptes de démonstration :")
                                .color(palette.text_primary)
                                .strong()
                                .size(12.0),
                        );
                        helpers::muted_label(ui, "• marie@company.com (Métadonneur)");
                        helpers::muted_label(ui, "• jean@company.com (Annotateur)");
                        helpers::muted_label(ui, "• sophie@company.com (Expert métier)");
                        ui.add_space(4.0);
                        helpers::muted_label(ui, "Mot de passe : password123");
                    });
            }
        });
    }
}

fn render_features(ui: &mut egui::Ui) {
    let palette = style::palette();
    ui.columns(3, |columns| {
        feature(
            &mut columns[0],
            "Extraction IA",
            "Extraction automatique des métadonnées avec une précision élevée.",
            palette.accent_blue,
        );
        feature(
            &mut columns[1],
            "Validation collaborative",
            "Workflow de validation multi-niveaux avec des rôles spécialisés.",
            palette.success,
        );
        feature(
            &mut columns[2],
            "Audit complet",
            "Traçabilité de toutes les actions et modifications.",
            palette.accent_indigo,
        );
    });
}

fn feature(ui: &mut egui::Ui, title: &str, body: &str, accent: egui::Color32) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).color(accent).strong().size(15.0));
        ui.add_space(4.0);
        ui.label(RichText::new(body).color(palette.text_muted).size(12.0));
    });
}
