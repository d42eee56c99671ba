use dashwiz::cli::wizard;
use dashwiz::cli::ScriptedConsole;
use dashwiz::errors::WizardError;
use dashwiz::settings::Settings;
use std::fs::File;
use tempfile::{tempdir, TempDir};

fn video_dir_with(names: &[&str]) -> TempDir {
    let dir = tempdir().expect("tempdir");
    for name in names {
        File::create(dir.path().join(name)).expect("create file");
    }
    dir
}

fn path_str(dir: &TempDir) -> &str {
    dir.path().to_str().expect("utf-8 path")
}

#[test]
fn video_step_fails_the_run_when_no_videos_exist() {
    let dir = video_dir_with(&["layout.xml", "notes.txt"]);
    let mut console = ScriptedConsole::default();

    let result = wizard::prompt_video_file(&mut console, path_str(&dir), None);

    assert!(matches!(result, Err(WizardError::NoVideoFiles)));
    assert!(
        console.questions().is_empty(),
        "the empty-directory failure must not prompt"
    );
}

#[test]
fn layout_step_resolves_none_without_prompting_when_nothing_matches() {
    let dir = video_dir_with(&["A.mp4"]);
    let mut console = ScriptedConsole::default();

    let layout = wizard::prompt_layout(&mut console, path_str(&dir), None).expect("layout step");

    assert_eq!(layout, None);
    assert!(console.questions().is_empty());
}

#[test]
fn gpx_step_resolves_none_without_prompting_when_nothing_matches() {
    let dir = video_dir_with(&["A.mp4"]);
    let mut console = ScriptedConsole::default();

    let gpx = wizard::prompt_gpx(&mut console, path_str(&dir), None).expect("gpx step");

    assert_eq!(gpx, None);
    assert!(console.questions().is_empty());
}

#[test]
fn invalid_ordinals_rerun_the_same_step() {
    let dir = video_dir_with(&["a.mp4", "b.mp4"]);
    let mut console = ScriptedConsole::with_answers(["5", "x", "2"]);

    let video =
        wizard::prompt_video_file(&mut console, path_str(&dir), None).expect("video step");

    assert_eq!(video, "b.mp4");
    assert_eq!(console.questions().len(), 3);
}

#[test]
fn empty_answer_accepts_the_stored_default() {
    let dir = video_dir_with(&["a.mp4", "b.mp4"]);
    let mut console = ScriptedConsole::with_answers([""]);

    let video = wizard::prompt_video_file(&mut console, path_str(&dir), Some("b.mp4"))
        .expect("video step");

    assert_eq!(video, "b.mp4");
    let question = &console.questions()[0];
    assert!(
        question.contains("b.mp4"),
        "the default should be displayed in the prompt: {question}"
    );
}

#[test]
fn stale_default_missing_from_the_directory_is_not_offered() {
    let dir = video_dir_with(&["a.mp4"]);
    let mut console = ScriptedConsole::with_answers(["", "1"]);

    let video = wizard::prompt_video_file(&mut console, path_str(&dir), Some("gone.mp4"))
        .expect("video step");

    assert_eq!(video, "a.mp4");
    assert_eq!(
        console.questions().len(),
        2,
        "an empty answer with no usable default re-runs the step"
    );
}

#[test]
fn directory_step_warns_and_reprompts_on_a_bad_path() {
    let dir = tempdir().expect("tempdir");
    let good = path_str(&dir).to_string();
    let mut console = ScriptedConsole::with_answers(["/definitely/not/here", good.as_str()]);

    let resolved = wizard::prompt_video_dir(&mut console, None).expect("directory step");

    assert_eq!(resolved, good);
    assert_eq!(console.questions().len(), 2);
}

#[test]
fn directory_step_substitutes_the_default_on_empty_input() {
    let dir = tempdir().expect("tempdir");
    let stored = path_str(&dir).to_string();
    let mut console = ScriptedConsole::with_answers([""]);

    let resolved =
        wizard::prompt_video_dir(&mut console, Some(stored.as_str())).expect("directory step");

    assert_eq!(resolved, stored);
}

#[test]
fn privacy_step_restarts_from_the_top_when_the_triple_is_incomplete() {
    let mut settings = Settings::default();
    // Yes, latitude, longitude, then an empty radius with no stored default;
    // the step starts over and the second pass declines.
    let mut console = ScriptedConsole::with_answers(["y", "52.132633", "5.291266", "", "n"]);

    wizard::prompt_privacy_zone(&mut console, &mut settings).expect("privacy step");

    assert_eq!(console.questions().len(), 5);
    assert_eq!(settings.privacy_zone(), None);
    assert_eq!(settings.latitude, None);
}

#[test]
fn privacy_step_decline_clears_the_stored_triple() {
    let mut settings = Settings::default();
    settings.latitude = Some("52.132633".into());
    settings.longitude = Some("5.291266".into());
    settings.privacy_radius = Some("0.5".into());
    let mut console = ScriptedConsole::with_answers(["n"]);

    wizard::prompt_privacy_zone(&mut console, &mut settings).expect("privacy step");

    assert_eq!(settings.privacy_zone(), None);
}

#[test]
fn privacy_step_defaults_to_yes_and_reuses_the_stored_triple() {
    let mut settings = Settings::default();
    settings.latitude = Some("52.132633".into());
    settings.longitude = Some("5.291266".into());
    settings.privacy_radius = Some("0.5".into());
    let mut console = ScriptedConsole::with_answers(["", "", "", ""]);

    wizard::prompt_privacy_zone(&mut console, &mut settings).expect("privacy step");

    assert_eq!(
        settings.privacy_zone(),
        Some(("52.132633", "5.291266", "0.5"))
    );
}

#[test]
fn anything_but_the_literal_y_declines_the_privacy_zone() {
    let mut settings = Settings::default();
    let mut console = ScriptedConsole::with_answers(["yes"]);

    wizard::prompt_privacy_zone(&mut console, &mut settings).expect("privacy step");

    assert_eq!(settings.privacy_zone(), None);
    assert_eq!(console.questions().len(), 1);
}

#[test]
fn full_wizard_pass_resolves_every_field() {
    let dir = video_dir_with(&["A.mp4", "layout.xml", "track.gpx"]);
    let mut settings = Settings::default();
    let mut console = ScriptedConsole::with_answers([
        path_str(&dir).to_string(),
        "1".into(),
        "1".into(),
        "1".into(),
        "n".into(),
    ]);

    wizard::run(&mut console, &mut settings).expect("wizard pass");

    assert_eq!(settings.video_dir.as_deref(), Some(path_str(&dir)));
    assert_eq!(settings.video_file.as_deref(), Some("A.mp4"));
    assert_eq!(settings.layout_file.as_deref(), Some("layout.xml"));
    assert_eq!(settings.gpx_file.as_deref(), Some("track.gpx"));
    assert_eq!(settings.privacy_zone(), None);
}
