//! Entry point for the egui-based DocuFlow UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use docuflow::egui_app::ui::{DocuFlowApp, MIN_VIEWPORT_SIZE};
use docuflow::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1280.0, 840.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "DocuFlow",
        native_options,
        Box::new(|_cc| Ok(Box::new(DocuFlowApp::new()))),
    )?;
    Ok(())
}
