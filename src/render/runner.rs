use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::thread;

use crate::errors::WizardError;
use crate::render::command::RENDERER_INTERPRETER;

/// Spawns the renderer over the built argument list and pumps its output
/// through until it exits. Blocks until termination and yields the exit
/// code; a process killed by a signal reports as 1.
pub fn run_renderer(args: &[String]) -> Result<i32, WizardError> {
    run_process(RENDERER_INTERPRETER, args)
}

/// Runs `program` with `args`, forwarding stdout and stderr line by line as
/// they arrive. One invocation per call; no retry, no timeout.
pub fn run_process(program: &str, args: &[String]) -> Result<i32, WizardError> {
    tracing::debug!(program, ?args, "spawning");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(WizardError::Spawn)?;

    let stdout_pump = child.stdout.take().map(|stream| {
        thread::spawn(move || {
            for line in BufReader::new(stream).lines().map_while(Result::ok) {
                println!("{line}");
            }
        })
    });
    let stderr_pump = child.stderr.take().map(|stream| {
        thread::spawn(move || {
            for line in BufReader::new(stream).lines().map_while(Result::ok) {
                eprintln!("{line}");
            }
        })
    });

    let status = child.wait().map_err(WizardError::Spawn)?;
    if let Some(pump) = stdout_pump {
        let _ = pump.join();
    }
    if let Some(pump) = stderr_pump {
        let _ = pump.join();
    }

    let code = status.code().unwrap_or(1);
    tracing::info!(code, "process finished");
    Ok(code)
}
