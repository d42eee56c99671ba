//! Session controller: runs wizard passes until one reaches the renderer.
//!
//! Any error in a pass is reported and the whole sequence starts over from
//! a fresh settings load; nothing short of a user interrupt or a completed
//! render ends the program.

use crate::cli::console::{Console, StdConsole};
use crate::cli::{output, wizard};
use crate::errors::WizardError;
use crate::render::{command, runner};
use crate::settings::SettingsStore;

/// Exit code used when the user interrupts the wizard.
const INTERRUPT_CODE: i32 = 130;

/// Drives the restart loop and returns the process exit code: the
/// renderer's own code after a completed pass.
pub fn run() -> i32 {
    let store = SettingsStore::at_default_path();
    let mut console = match StdConsole::new() {
        Ok(console) => console,
        Err(err) => {
            output::error(err);
            return 1;
        }
    };

    loop {
        match run_once(&mut console, &store) {
            Ok(code) => {
                output::success("Done. Have a nice day!");
                return code;
            }
            Err(WizardError::Interrupted) => return INTERRUPT_CODE,
            Err(err) => output::error(err.to_string()),
        }
    }
}

/// One full pass: load settings, run the five prompts, build the command,
/// spawn the renderer, save the settings.
///
/// The save runs whether or not the renderer succeeded; a save failure is
/// reported but never changes the exit code.
pub fn run_once(console: &mut dyn Console, store: &SettingsStore) -> Result<i32, WizardError> {
    let mut settings = store.load();
    wizard::run(console, &mut settings)?;

    let video_dir = settings
        .video_dir
        .clone()
        .expect("wizard resolves the video directory");
    let video_file = settings
        .video_file
        .clone()
        .expect("wizard resolves the video file");
    let output_file = command::output_file_name(&video_file);

    output::info(format!("videoDir:{video_dir}"));
    output::info(format!("videoFile:{video_file}"));
    output::info(format!(
        "layoutFile:{}",
        settings.layout_file.as_deref().unwrap_or("-")
    ));
    output::info(format!(
        "gpx:{}",
        settings.gpx_file.as_deref().unwrap_or("-")
    ));
    output::info(format!("outputVideoFile:{output_file}"));
    output::info("");

    let args = command::renderer_args(
        &video_dir,
        &video_file,
        settings.gpx_file.as_deref(),
        settings.layout_file.as_deref(),
        &output_file,
        settings.privacy_zone(),
    );
    output::info(format!(
        "Executing command: {} {}",
        command::RENDERER_INTERPRETER,
        args.join(" ")
    ));

    let code = runner::run_renderer(&args)?;

    if let Err(err) = store.save(&settings) {
        output::warning(format!(
            "Could not save settings to {}: {err}",
            store.path().display()
        ));
    }

    Ok(code)
}
