//! Shared egui UI modules.
pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
