use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{MemorySettings, SettingValue, SettingsError, SettingsResult, SettingsStore};

const SETTINGS_DIR: &str = "pixel-booster";
const SETTINGS_FILE: &str = "settings.json";

/// Settings kept as a pretty-printed JSON object on disk.
///
/// Values are buffered in memory; nothing touches the file until [`JsonSettingsFile::flush`].
#[derive(Debug, Clone)]
pub struct JsonSettingsFile {
    path: PathBuf,
    values: MemorySettings,
}

/// `<config home>/pixel-booster/settings.json`, where the config home is
/// `$XDG_CONFIG_HOME` when set and non-empty, else `$HOME/.config`.
pub fn default_settings_path() -> SettingsResult<PathBuf> {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    settings_path_in(xdg_config_home.as_deref(), home.as_deref())
}

fn settings_path_in(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> SettingsResult<PathBuf> {
    let mut path = match xdg_config_home.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(config_home) => config_home.to_path_buf(),
        None => home
            .ok_or(SettingsError::MissingHomeDirectory)?
            .join(".config"),
    };
    path.push(SETTINGS_DIR);
    path.push(SETTINGS_FILE);
    Ok(path)
}

impl JsonSettingsFile {
    /// Open the settings file at the default config location.
    ///
    /// An unreadable or malformed file is logged and replaced by an empty
    /// store, so the editor still starts with default options.
    pub fn open_default() -> SettingsResult<Self> {
        Ok(Self::open_or_empty(default_settings_path()?))
    }

    /// Like [`JsonSettingsFile::open`], but falls back to an empty store on read or parse errors.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    ?err,
                    path = %path.display(),
                    "failed to load settings; using defaults"
                );
                Self {
                    path,
                    values: MemorySettings::new(),
                }
            }
        }
    }

    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing; starting empty");
            return Ok(Self {
                path,
                values: MemorySettings::new(),
            });
        }

        let serialized = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let values: BTreeMap<String, SettingValue> = serde_json::from_str(&serialized)?;
        tracing::debug!(path = %path.display(), keys = values.len(), "settings file loaded");
        Ok(Self {
            path,
            values: MemorySettings::from_map(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let serialized = serde_json::to_string_pretty(self.values.as_map())?;
        fs::write(&self.path, serialized).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            keys = self.values.len(),
            "settings file written"
        );
        Ok(())
    }
}

impl SettingsStore for JsonSettingsFile {
    fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.value(key)
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.values.set_value(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("pixel-booster-settings-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn settings_path_prefers_xdg_config_home() {
        let path = settings_path_in(
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");
        assert_eq!(
            path,
            PathBuf::from("/tmp/config-root/pixel-booster/settings.json")
        );
    }

    #[test]
    fn settings_path_skips_empty_xdg_and_uses_home_config() {
        let expected = PathBuf::from("/tmp/home/.config/pixel-booster/settings.json");
        let path = settings_path_in(Some(Path::new("")), Some(Path::new("/tmp/home")))
            .expect("path should resolve");
        assert_eq!(path, expected);

        let path = settings_path_in(None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");
        assert_eq!(path, expected);
    }

    #[test]
    fn settings_path_requires_a_config_root() {
        let error = settings_path_in(None, None).unwrap_err();
        assert!(matches!(error, SettingsError::MissingHomeDirectory));
    }

    #[test]
    fn missing_file_opens_empty() {
        with_temp_root(|root| {
            let path = settings_path_in(Some(root), None).unwrap();
            let store = JsonSettingsFile::open(&path).unwrap();
            assert!(store.value("CursorSize").is_none());
            assert!(!path.exists());
        });
    }

    #[test]
    fn flush_then_open_round_trips_values() {
        with_temp_root(|root| {
            let path = settings_path_in(Some(root), None).unwrap();
            let mut store = JsonSettingsFile::open(&path).unwrap();
            store.set_value("CursorSize", Size::new(16, 24).into());
            store.set_value("ShowGrid", true.into());
            store.set_value("ZoomLevel", 12_i32.into());
            store.set_value("MainColor", "#ff8800".into());
            store.flush().expect("flush should create parent dirs");

            let reopened = JsonSettingsFile::open(&path).unwrap();
            assert_eq!(reopened.value("CursorSize"), Some(SettingValue::Size(Size::new(16, 24))));
            assert_eq!(reopened.value("ShowGrid"), Some(SettingValue::Bool(true)));
            assert_eq!(reopened.value("ZoomLevel"), Some(SettingValue::Int(12)));
            assert_eq!(
                reopened.value("MainColor"),
                Some(SettingValue::Text("#ff8800".to_string()))
            );
        });
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        with_temp_root(|root| {
            let path = root.join("settings.json");
            fs::write(&path, "{ not json").unwrap();
            let error = JsonSettingsFile::open(&path).unwrap_err();
            assert!(matches!(error, SettingsError::Parse(_)));
        });
    }

    #[test]
    fn malformed_file_opens_empty_in_lenient_mode() {
        with_temp_root(|root| {
            let path = root.join("settings.json");
            fs::write(&path, "{ not json").unwrap();
            let store = JsonSettingsFile::open_or_empty(&path);
            assert_eq!(store.path(), path.as_path());
            assert!(store.value("CursorSize").is_none());
        });
    }

    #[test]
    fn unreadable_file_opens_empty_in_lenient_mode() {
        with_temp_root(|root| {
            // A directory in place of the file fails the read.
            let path = root.join("settings.json");
            fs::create_dir_all(&path).unwrap();
            assert!(matches!(
                JsonSettingsFile::open(&path),
                Err(SettingsError::Read { .. })
            ));
            let store = JsonSettingsFile::open_or_empty(&path);
            assert!(store.value("Tool").is_none());
        });
    }
}
