//! Persisted wizard defaults.
//!
//! Owns the Settings record plus disk persistence helpers. The record is
//! loaded once per wizard pass, mutated in place as prompts resolve, and
//! written back after the renderer exits.

pub mod error;
pub mod model;
pub mod store;

pub use error::SettingsError;
pub use model::Settings;
pub use store::{SettingsStore, SETTINGS_FILE};
