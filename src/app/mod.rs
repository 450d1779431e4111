use std::path::PathBuf;

use crate::cursor::validate_cursor_size;
use crate::error::AppResult;
use crate::geometry::{Color, Size};
use crate::options::EditorOptions;
use crate::pointer::PointerTracker;
use crate::settings::{JsonSettingsFile, SettingsStore};

/// Session context handed to the UI layer: the editor options, the pointer
/// tracker of the image widget, and the store the options persist to.
#[derive(Debug)]
pub struct App<S: SettingsStore> {
    options: EditorOptions,
    pointer: PointerTracker,
    store: S,
}

impl<S: SettingsStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            options: EditorOptions::new(),
            pointer: PointerTracker::new(),
            store,
        }
    }

    /// Load persisted options from the store.
    pub fn start(&mut self) {
        tracing::info!(event = "start");
        self.options.load_state(&self.store);
    }

    /// Write the current options into the store.
    pub fn save(&mut self) {
        self.options.save_state(&mut self.store);
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EditorOptions {
        &mut self.options
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Options and tracker together, for pointer handlers that snap through the options.
    pub fn pointer_mut(&mut self) -> (&EditorOptions, &mut PointerTracker) {
        (&self.options, &mut self.pointer)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate and apply a new cursor size, then refresh the cursor shift.
    pub fn set_cursor_size(&mut self, size: Size) -> AppResult<()> {
        let size = validate_cursor_size(size)?;
        self.options.set_cursor_size(size);
        self.options.update_cursor_shift();
        tracing::debug!(?size, shift = ?self.options.cursor_shift(), "cursor size changed");
        Ok(())
    }

    pub fn set_main_color_name(&mut self, name: &str) -> AppResult<()> {
        let color: Color = name.parse()?;
        self.options.set_main_color(color);
        Ok(())
    }

    pub fn set_alt_color_name(&mut self, name: &str) -> AppResult<()> {
        let color: Color = name.parse()?;
        self.options.set_alt_color(color);
        Ok(())
    }
}

impl App<JsonSettingsFile> {
    /// Session backed by the settings file in the user's config directory.
    ///
    /// Only a missing config home is an error; a broken settings file starts
    /// the session with default options.
    pub fn with_default_settings() -> AppResult<Self> {
        Ok(Self::new(JsonSettingsFile::open_default()?))
    }

    pub fn with_settings_file(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonSettingsFile::open_or_empty(path))
    }

    /// Save the options and write the settings file.
    pub fn shutdown(&mut self) -> AppResult<()> {
        self.save();
        self.store.flush()?;
        tracing::info!(event = "shutdown", path = %self.store.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::geometry::{Point, Rect};
    use crate::options::{keys, ToolKind};
    use crate::settings::{MemorySettings, SettingValue};

    #[test]
    fn start_loads_options_from_store() {
        let mut store = MemorySettings::new();
        store.set_value(keys::CURSOR_SIZE, Size::new(8, 8).into());
        store.set_value(keys::TOOL, ToolKind::Zoom.id().into());
        store.set_value(keys::ZOOM_LEVEL, 0_i32.into());

        let mut app = App::new(store);
        app.start();

        assert_eq!(app.options().cursor_size(), Size::new(8, 8));
        assert_eq!(app.options().tile_selection(), Rect::new(0, 0, 8, 8));
        assert_eq!(app.options().tool(), ToolKind::Zoom);
        assert_eq!(app.options().zoom(), 1);
    }

    #[test]
    fn save_writes_changed_options_back() {
        let mut app = App::new(MemorySettings::new());
        app.start();
        app.options_mut().set_show_grid(true);
        app.save();

        let store = app.into_store();
        assert_eq!(store.value(keys::SHOW_GRID), Some(SettingValue::Bool(true)));
    }

    #[test]
    fn set_cursor_size_rejects_degenerate_sizes() {
        let mut app = App::new(MemorySettings::new());
        let error = app.set_cursor_size(Size::new(0, 16)).unwrap_err();
        assert!(matches!(error, AppError::Cursor(_)));
        assert_eq!(app.options().cursor_size(), Size::new(32, 32));
    }

    #[test]
    fn set_cursor_size_refreshes_shift() {
        let mut app = App::new(MemorySettings::new());
        app.options_mut()
            .set_tile_selection(Rect::new(0, 0, 32, 32));
        app.set_cursor_size(Size::new(16, 32))
            .expect("16x32 is a valid cursor");
        assert!(app.options().cursor_shift().horizontal);
        assert!(!app.options().cursor_shift().vertical);
    }

    #[test]
    fn color_names_are_parsed_or_rejected() {
        let mut app = App::new(MemorySettings::new());
        app.set_main_color_name("#336699").expect("hex color parses");
        assert_eq!(app.options().main_color(), Color::new(0x33, 0x66, 0x99));
        let error = app.set_alt_color_name("mauve-ish").unwrap_err();
        assert!(matches!(error, AppError::Color(_)));
        assert_eq!(app.options().alt_color(), Color::BLACK);
    }

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("pixel-booster-app-{pid}-{nanos}"));
        path
    }

    #[test]
    fn corrupt_settings_file_starts_with_defaults_and_is_rewritten() {
        let root = fixture_root();
        std::fs::create_dir_all(&root).unwrap();
        let path = root.join("settings.json");
        std::fs::write(&path, "{\"CursorSize\": [oops").unwrap();

        let mut app = App::with_settings_file(&path);
        app.start();
        assert_eq!(app.options(), &EditorOptions::new());

        app.options_mut().set_zoom(4);
        app.shutdown().expect("shutdown should write the settings file");

        let mut reopened = App::with_settings_file(&path);
        reopened.start();
        assert_eq!(reopened.options().zoom(), 4);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn pointer_handlers_snap_through_options() {
        let mut app = App::new(MemorySettings::new());
        let (options, pointer) = app.pointer_mut();
        pointer.pointer_pressed(options, Point::new(10, 10));
        pointer.pointer_released(options, Point::new(40, 10));
        assert_eq!(app.pointer().selection(), Rect::new(0, 0, 64, 32));
    }
}
