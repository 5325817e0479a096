//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Logging setup for the application.
pub mod logging;
/// Shared egui UI modules.
pub mod egui_app;
/// Document workflow domain: users, documents, fixtures, session.
pub mod workflow;
