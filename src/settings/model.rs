use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stores the last-used wizard answers between sessions.
///
/// Every field is optional; a missing key in the settings file simply reads
/// as `None`. Keys this version does not know about are kept in `extra` and
/// written back verbatim on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Directory holding the video, layout, and telemetry files.
    /// Immutable for the rest of a run once the directory prompt resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_dir: Option<String>,
    /// Selected video filename, relative to `video_dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpx_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_radius: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// The complete privacy triple in `(latitude, longitude, radius)` order.
    ///
    /// The triple is all-or-nothing: `None` unless all three parts are
    /// present and non-empty.
    pub fn privacy_zone(&self) -> Option<(&str, &str, &str)> {
        match (&self.latitude, &self.longitude, &self.privacy_radius) {
            (Some(lat), Some(lon), Some(radius))
                if !lat.is_empty() && !lon.is_empty() && !radius.is_empty() =>
            {
                Some((lat, lon, radius))
            }
            _ => None,
        }
    }

    pub fn clear_privacy_zone(&mut self) {
        self.latitude = None;
        self.longitude = None;
        self.privacy_radius = None;
    }
}
