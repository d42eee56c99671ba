//! The five-step prompt sequencer.
//!
//! Each step asks one line-oriented question, offers the prior session's
//! value as the default, and loops on invalid input instead of failing.
//! Only two things abort a pass: a directory with no video files, and a
//! user interrupt.

use std::fs;

use crate::cli::console::Console;
use crate::cli::output;
use crate::errors::WizardError;
use crate::settings::Settings;

const VIDEO_EXTENSION: &str = ".mp4";
const LAYOUT_EXTENSION: &str = ".xml";
const GPX_EXTENSION: &str = ".gpx";

/// Runs all steps in order, resolving each field of `settings` in place.
///
/// On success `video_dir` and `video_file` are guaranteed to be set;
/// `layout_file` and `gpx_file` are `None` when the directory holds no
/// matching files, and the privacy triple is `None` unless the user
/// completed it.
pub fn run(console: &mut dyn Console, settings: &mut Settings) -> Result<(), WizardError> {
    let dir = prompt_video_dir(console, non_empty(&settings.video_dir))?;
    output::info(format!("videoDir set to: {dir}"));
    settings.video_dir = Some(dir.clone());

    settings.video_file = Some(prompt_video_file(
        console,
        &dir,
        non_empty(&settings.video_file),
    )?);
    settings.layout_file = prompt_layout(console, &dir, non_empty(&settings.layout_file))?;
    settings.gpx_file = prompt_gpx(console, &dir, non_empty(&settings.gpx_file))?;
    prompt_privacy_zone(console, settings)?;

    Ok(())
}

/// Asks for the video directory until an existing, readable one comes back.
pub fn prompt_video_dir(
    console: &mut dyn Console,
    default: Option<&str>,
) -> Result<String, WizardError> {
    loop {
        let question = with_default("Which directory contains the video?", default);
        let answer = console.ask(&question)?;
        let answer = answer.trim();
        let candidate = if answer.is_empty() {
            default.unwrap_or(answer)
        } else {
            answer
        };

        match fs::metadata(candidate) {
            Ok(meta) if meta.is_dir() => return Ok(candidate.to_string()),
            _ => output::warning("Invalid directory. Try again or press control + c."),
        }
    }
}

/// Asks which video to render. The one step with no empty state: a
/// directory without video files fails the whole run.
pub fn prompt_video_file(
    console: &mut dyn Console,
    dir: &str,
    default: Option<&str>,
) -> Result<String, WizardError> {
    let videos = list_files_with_extension(dir, VIDEO_EXTENSION)?;
    if videos.is_empty() {
        return Err(WizardError::NoVideoFiles);
    }
    prompt_choice(
        console,
        "Which video file? Type the number in front of it.",
        &videos,
        default,
    )
}

/// Asks which layout to use; a directory without layouts resolves to `None`
/// without prompting.
pub fn prompt_layout(
    console: &mut dyn Console,
    dir: &str,
    default: Option<&str>,
) -> Result<Option<String>, WizardError> {
    let layouts = list_files_with_extension(dir, LAYOUT_EXTENSION)?;
    if layouts.is_empty() {
        return Ok(None);
    }
    prompt_choice(
        console,
        "Which layout? Type the number in front of it.",
        &layouts,
        default,
    )
    .map(Some)
}

/// Asks which telemetry file to use; same shape as the layout step.
pub fn prompt_gpx(
    console: &mut dyn Console,
    dir: &str,
    default: Option<&str>,
) -> Result<Option<String>, WizardError> {
    let tracks = list_files_with_extension(dir, GPX_EXTENSION)?;
    if tracks.is_empty() {
        return Ok(None);
    }
    prompt_choice(
        console,
        "Which GPX? Type the number in front of it.",
        &tracks,
        default,
    )
    .map(Some)
}

/// Collects the privacy triple, or clears it when the user declines.
///
/// The yes/no question takes the literal answer "y" as yes and anything
/// else as no; empty falls back to yes only when a complete triple is
/// already stored. An incomplete triple restarts this whole step, not just
/// the missing field.
pub fn prompt_privacy_zone(
    console: &mut dyn Console,
    settings: &mut Settings,
) -> Result<(), WizardError> {
    loop {
        let stored_zone = settings.privacy_zone().is_some();
        let question = if stored_zone {
            "Hide a location with a privacy zone? (y/n) [y]"
        } else {
            "Hide a location with a privacy zone? (y/n)"
        };
        let answer = console.ask(question)?;
        let answer = answer.trim();
        let wants_zone = if answer.is_empty() {
            stored_zone
        } else {
            answer == "y"
        };

        if !wants_zone {
            settings.clear_privacy_zone();
            return Ok(());
        }

        let latitude =
            prompt_privacy_value(console, "Privacy zone latitude?", non_empty(&settings.latitude))?;
        let longitude = prompt_privacy_value(
            console,
            "Privacy zone longitude?",
            non_empty(&settings.longitude),
        )?;
        let radius = prompt_privacy_value(
            console,
            "Privacy zone radius?",
            non_empty(&settings.privacy_radius),
        )?;

        if latitude.is_empty() || longitude.is_empty() || radius.is_empty() {
            output::warning("Latitude, longitude, and radius are all required. Starting over.");
            continue;
        }

        settings.latitude = Some(latitude);
        settings.longitude = Some(longitude);
        settings.privacy_radius = Some(radius);
        return Ok(());
    }
}

fn prompt_privacy_value(
    console: &mut dyn Console,
    question: &str,
    default: Option<&str>,
) -> Result<String, WizardError> {
    let question = with_default(question, default);
    let answer = console.ask(&question)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Enumerates `candidates` with 1-based ordinals and asks until the answer
/// is a valid ordinal, or empty while a default is on offer.
fn prompt_choice(
    console: &mut dyn Console,
    question: &str,
    candidates: &[String],
    default: Option<&str>,
) -> Result<String, WizardError> {
    let default_index = default.and_then(|name| candidates.iter().position(|c| c == name));
    loop {
        for (index, name) in candidates.iter().enumerate() {
            output::info(format!("{}) {}", index + 1, name));
        }
        let prompt = match default_index {
            Some(index) => format!("{} [{}]", question, candidates[index]),
            None => question.to_string(),
        };
        let answer = console.ask(&prompt)?;
        let answer = answer.trim();

        if answer.is_empty() {
            if let Some(index) = default_index {
                return Ok(candidates[index].clone());
            }
        }
        if let Ok(number) = answer.parse::<usize>() {
            if (1..=candidates.len()).contains(&number) {
                return Ok(candidates[number - 1].clone());
            }
        }
    }
}

/// Names in `dir` ending with `extension` (case-insensitive), sorted so the
/// ordinals stay stable between the three scans of a pass.
fn list_files_with_extension(dir: &str, extension: &str) -> Result<Vec<String>, WizardError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.len() > extension.len() && name.to_ascii_lowercase().ends_with(extension) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn with_default(question: &str, default: Option<&str>) -> String {
    match default {
        Some(value) => format!("{question} [{value}]"),
        None => question.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
