use super::{
    EditorOptions, ToolKind, DEFAULT_ALT_COLOR, DEFAULT_LANGUAGE, DEFAULT_MAIN_COLOR,
    DEFAULT_NEW_IMAGE_COLOR, DEFAULT_NEW_IMAGE_SIZE, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
};
use crate::cursor::{DEFAULT_CURSOR_SIZE, DEFAULT_GRID_SIZE};
use crate::geometry::Color;
use crate::settings::SettingsStore;

/// Names under which each option is stored.
pub mod keys {
    pub const CURSOR_SIZE: &str = "CursorSize";
    pub const GRID_SIZE: &str = "GridSize";
    pub const NEW_IMAGE_SIZE: &str = "NewImageSize";
    pub const TRANSPARENCY: &str = "TransparencyEnabled";
    pub const ZOOM_LEVEL: &str = "ZoomLevel";
    pub const TOOL: &str = "Tool";
    pub const MAIN_COLOR: &str = "MainColor";
    pub const ALT_COLOR: &str = "AltColor";
    pub const LANGUAGE: &str = "Language";
    pub const NEW_IMAGE_COLOR: &str = "NewImageColor";
    pub const SHOW_GRID: &str = "ShowGrid";
    pub const SHOW_PIXEL_GRID: &str = "ShowPixelGrid";

    pub const ALL: [&str; 12] = [
        CURSOR_SIZE,
        GRID_SIZE,
        NEW_IMAGE_SIZE,
        TRANSPARENCY,
        ZOOM_LEVEL,
        TOOL,
        MAIN_COLOR,
        ALT_COLOR,
        LANGUAGE,
        NEW_IMAGE_COLOR,
        SHOW_GRID,
        SHOW_PIXEL_GRID,
    ];
}

impl EditorOptions {
    /// Write every persisted option to `store`. Cursor shift and tile selection are session-only.
    pub fn save_state<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        store.set_value(keys::CURSOR_SIZE, self.cursor_size().into());
        store.set_value(keys::GRID_SIZE, self.grid_size().into());
        store.set_value(keys::NEW_IMAGE_SIZE, self.new_image_size.into());
        store.set_value(keys::TRANSPARENCY, self.transparency_enabled.into());
        store.set_value(keys::ZOOM_LEVEL, self.zoom.into());
        store.set_value(keys::TOOL, self.tool.id().into());
        store.set_value(keys::MAIN_COLOR, self.main_color.name().into());
        store.set_value(keys::ALT_COLOR, self.alt_color.name().into());
        store.set_value(keys::LANGUAGE, self.language.as_str().into());
        store.set_value(keys::NEW_IMAGE_COLOR, self.new_image_color.name().into());
        store.set_value(keys::SHOW_GRID, self.show_grid.into());
        store.set_value(keys::SHOW_PIXEL_GRID, self.show_pixel_grid.into());
        tracing::debug!(keys = keys::ALL.len(), "editor options saved");
    }

    /// Read every persisted option from `store`, using defaults for missing or unusable values.
    ///
    /// The tile selection is reset to the origin with the loaded cursor size. The
    /// cursor shift is left untouched; call [`EditorOptions::update_cursor_shift`]
    /// afterwards if it should follow the reset selection.
    pub fn load_state<S: SettingsStore + ?Sized>(&mut self, store: &S) {
        let cursor_size = store.size_or(keys::CURSOR_SIZE, DEFAULT_CURSOR_SIZE);
        let cursor_size = if cursor_size.is_valid_cursor() {
            cursor_size
        } else {
            tracing::warn!(
                width = cursor_size.width,
                height = cursor_size.height,
                "stored cursor size is degenerate; using default"
            );
            DEFAULT_CURSOR_SIZE
        };
        self.cursor.set_cursor_size(cursor_size);
        self.cursor
            .set_grid_size(store.size_or(keys::GRID_SIZE, DEFAULT_GRID_SIZE));
        self.cursor.reset_selection();

        self.new_image_size = store.size_or(keys::NEW_IMAGE_SIZE, DEFAULT_NEW_IMAGE_SIZE);
        self.transparency_enabled = store.bool_or(keys::TRANSPARENCY, false);

        let zoom = store.int_or(keys::ZOOM_LEVEL, i64::from(DEFAULT_ZOOM));
        let zoom = i32::try_from(zoom).unwrap_or(if zoom < 0 { MIN_ZOOM } else { MAX_ZOOM });
        self.set_zoom(zoom);

        let tool_id = store.int_or(keys::TOOL, ToolKind::default().id());
        self.tool = ToolKind::from_id(tool_id).unwrap_or_else(|| {
            tracing::warn!(tool_id, "unknown stored tool; using default");
            ToolKind::default()
        });

        self.main_color = load_color(store, keys::MAIN_COLOR, DEFAULT_MAIN_COLOR);
        self.alt_color = load_color(store, keys::ALT_COLOR, DEFAULT_ALT_COLOR);
        self.language = store.text_or(keys::LANGUAGE, DEFAULT_LANGUAGE);
        self.new_image_color = load_color(store, keys::NEW_IMAGE_COLOR, DEFAULT_NEW_IMAGE_COLOR);
        self.show_grid = store.bool_or(keys::SHOW_GRID, false);
        self.show_pixel_grid = store.bool_or(keys::SHOW_PIXEL_GRID, false);

        tracing::debug!(
            cursor = ?self.cursor_size(),
            zoom = self.zoom,
            tool = ?self.tool,
            "editor options loaded"
        );
    }
}

fn load_color<S: SettingsStore + ?Sized>(store: &S, key: &str, default: Color) -> Color {
    let name = store.text_or(key, &default.name());
    name.parse().unwrap_or_else(|err| {
        tracing::warn!(key, %err, "stored color is invalid; using default");
        default
    })
}
