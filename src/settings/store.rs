use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::settings::{Settings, SettingsError};

/// Fixed relative path of the settings file, resolved against the working
/// directory.
pub const SETTINGS_FILE: &str = "iadt.json";

const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Settings`].
///
/// Single interactive session assumed: no locking, no multi-process safety.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_path() -> Self {
        Self::new(PathBuf::from(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file, creating it with a default record when it
    /// does not exist yet.
    ///
    /// Never fails: unreadable or unparsable content degrades to the
    /// default all-empty record so a broken file cannot wedge the wizard.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        "settings file is not valid JSON, starting from defaults: {err}"
                    );
                    Settings::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let defaults = Settings::default();
                if let Err(err) = self.save(&defaults) {
                    tracing::warn!(
                        path = %self.path.display(),
                        "could not create settings file: {err}"
                    );
                }
                defaults
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "settings file unreadable, starting from defaults: {err}"
                );
                Settings::default()
            }
        }
    }

    /// Serializes the full record, passthrough keys included, and replaces
    /// the settings file.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| SettingsError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), SettingsError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
