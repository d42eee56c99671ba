//! Renderer collaboration: argument assembly and process supervision.

pub mod command;
pub mod runner;

pub use command::{output_file_name, renderer_args, RENDERER_INTERPRETER, RENDERER_SCRIPT};
pub use runner::run_renderer;
