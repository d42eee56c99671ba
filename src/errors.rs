use thiserror::Error;

/// Error type that covers one pass of the wizard pipeline.
///
/// Everything here is fatal for the current run: the session controller
/// reports the message and restarts the wizard from the first prompt.
/// `Interrupted` is the one exception and ends the program instead.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("The folder did not contain video files")]
    NoVideoFiles,
    #[error("Failed to run the renderer: {0}")]
    Spawn(std::io::Error),
    #[error("interrupted")]
    Interrupted,
}
