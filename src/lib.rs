#![doc(test(attr(deny(warnings))))]

//! Dashwiz is an interactive wizard that collects the inputs for one
//! dashboard render (video, layout, telemetry, privacy zone) and drives the
//! external renderer over the selection.

pub mod cli;
pub mod errors;
pub mod render;
pub mod session;
pub mod settings;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dashwiz tracing initialized.");
    });
}
