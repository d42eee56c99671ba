//! Deterministic mapping from the resolved selections to the renderer's
//! command line.

/// Interpreter the renderer script runs under.
pub const RENDERER_INTERPRETER: &str = "python3";

/// Renderer invocation target, the first entry of every argument list.
pub const RENDERER_SCRIPT: &str = "venv/bin/gopro-dashboard.py";

const FONT_FILE: &str = "Verdana.ttf";
const OUTPUT_TAG: &str = "_dashboard";

/// Builds the ordered argument list for one renderer invocation.
///
/// Flag/value pairs for files that were never found or selected are left
/// out entirely, and the privacy flag only appears for a complete triple.
/// The returned list never contains empty placeholder entries.
pub fn renderer_args(
    video_dir: &str,
    video_file: &str,
    gpx_file: Option<&str>,
    layout_file: Option<&str>,
    output_file: &str,
    privacy_zone: Option<(&str, &str, &str)>,
) -> Vec<String> {
    let mut args = vec![RENDERER_SCRIPT.to_string()];

    if let Some((latitude, longitude, radius)) = privacy_zone {
        args.push("--privacy".into());
        args.push(format!("{latitude},{longitude},{radius}"));
    }

    args.push("--font".into());
    args.push(FONT_FILE.into());

    if let Some(layout) = layout_file {
        args.push("--layout".into());
        args.push("xml".into());
        args.push("--layout-xml".into());
        args.push(join(video_dir, layout));
    }

    if let Some(gpx) = gpx_file {
        args.push("--gpx".into());
        args.push(join(video_dir, gpx));
    }

    args.push(join(video_dir, video_file));
    args.push(join(video_dir, output_file));

    args.retain(|arg| !arg.is_empty());
    args
}

/// Derives the output filename by tagging the stem: `ride.mp4` becomes
/// `ride_dashboard.mp4`. A name without an extension is returned unchanged.
pub fn output_file_name(input_name: &str) -> String {
    match input_name.rsplit_once('.') {
        Some((stem, extension)) => format!("{stem}{OUTPUT_TAG}.{extension}"),
        None => input_name.to_string(),
    }
}

fn join(dir: &str, file: &str) -> String {
    format!("{dir}/{file}")
}
