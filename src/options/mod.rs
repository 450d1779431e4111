//! Process-wide editor options: the grid cursor plus the scalar preferences
//! the UI reads and writes during a session.

mod persist;
mod tool;

use crate::cursor::{CursorShift, GridCursor};
use crate::geometry::{Color, Point, Rect, Size};

pub use persist::keys;
pub use tool::ToolKind;

pub const MIN_ZOOM: i32 = 1;
pub const MAX_ZOOM: i32 = 32;

pub const DEFAULT_NEW_IMAGE_SIZE: Size = Size::new(256, 256);
pub const DEFAULT_ZOOM: i32 = 1;
pub const DEFAULT_MAIN_COLOR: Color = Color::WHITE;
pub const DEFAULT_ALT_COLOR: Color = Color::BLACK;
pub const DEFAULT_NEW_IMAGE_COLOR: Color = Color::WHITE;
pub const DEFAULT_LANGUAGE: &str = "en_us";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    cursor: GridCursor,
    new_image_size: Size,
    transparency_enabled: bool,
    zoom: i32,
    main_color: Color,
    alt_color: Color,
    new_image_color: Color,
    tool: ToolKind,
    language: String,
    show_grid: bool,
    show_pixel_grid: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self {
            cursor: GridCursor::new(),
            new_image_size: DEFAULT_NEW_IMAGE_SIZE,
            transparency_enabled: false,
            zoom: DEFAULT_ZOOM,
            main_color: DEFAULT_MAIN_COLOR,
            alt_color: DEFAULT_ALT_COLOR,
            new_image_color: DEFAULT_NEW_IMAGE_COLOR,
            tool: ToolKind::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            show_grid: false,
            show_pixel_grid: false,
        }
    }

    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut GridCursor {
        &mut self.cursor
    }

    pub fn cursor_size(&self) -> Size {
        self.cursor.cursor_size()
    }

    /// `size` must be at least 1x1; see [`crate::cursor::validate_cursor_size`].
    pub fn set_cursor_size(&mut self, size: Size) {
        self.cursor.set_cursor_size(size);
    }

    pub fn grid_size(&self) -> Size {
        self.cursor.grid_size()
    }

    pub fn set_grid_size(&mut self, size: Size) {
        self.cursor.set_grid_size(size);
    }

    pub fn tile_selection(&self) -> Rect {
        self.cursor.tile_selection()
    }

    pub fn set_tile_selection(&mut self, selection: Rect) {
        self.cursor.set_tile_selection(selection);
    }

    pub fn cursor_shift(&self) -> CursorShift {
        self.cursor.shift()
    }

    pub fn update_cursor_shift(&mut self) {
        self.cursor.update_cursor_shift();
    }

    pub fn clean_cursor_shift(&mut self) {
        self.cursor.clean_cursor_shift();
    }

    pub fn move_selection(&mut self, center: Point) {
        self.cursor.move_selection(center);
    }

    pub fn pos_to_grid(&self, pos: Point) -> Rect {
        self.cursor.pos_to_grid(pos)
    }

    pub fn new_image_size(&self) -> Size {
        self.new_image_size
    }

    pub fn set_new_image_size(&mut self, size: Size) {
        self.new_image_size = size;
    }

    pub fn transparency_enabled(&self) -> bool {
        self.transparency_enabled
    }

    pub fn set_transparency_enabled(&mut self, enabled: bool) {
        self.transparency_enabled = enabled;
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Out-of-range values are clamped into `MIN_ZOOM..=MAX_ZOOM`.
    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn main_color(&self) -> Color {
        self.main_color
    }

    pub fn set_main_color(&mut self, color: Color) {
        self.main_color = color;
    }

    pub fn alt_color(&self) -> Color {
        self.alt_color
    }

    pub fn set_alt_color(&mut self, color: Color) {
        self.alt_color = color;
    }

    pub fn new_image_color(&self) -> Color {
        self.new_image_color
    }

    pub fn set_new_image_color(&mut self, color: Color) {
        self.new_image_color = color;
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn show_pixel_grid(&self) -> bool {
        self.show_pixel_grid
    }

    pub fn set_show_pixel_grid(&mut self, show: bool) {
        self.show_pixel_grid = show;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_zoom_clamps_into_supported_range() {
        let mut options = EditorOptions::new();
        for (requested, expected) in [
            (0, 1),
            (100, 32),
            (5, 5),
            (-7, 1),
            (1, 1),
            (32, 32),
            (i32::MIN, 1),
            (i32::MAX, 32),
        ] {
            options.set_zoom(requested);
            assert_eq!(options.zoom(), expected, "set_zoom({requested})");
        }
    }

    #[test]
    fn new_options_use_documented_defaults() {
        let options = EditorOptions::new();
        assert_eq!(options.cursor_size(), Size::new(32, 32));
        assert_eq!(options.grid_size(), Size::new(32, 32));
        assert_eq!(options.tile_selection(), Rect::new(0, 0, 32, 32));
        assert_eq!(options.cursor_shift(), CursorShift::default());
        assert_eq!(options.new_image_size(), Size::new(256, 256));
        assert_eq!(options.zoom(), 1);
        assert_eq!(options.tool(), ToolKind::Pencil);
        assert_eq!(options.main_color(), Color::WHITE);
        assert_eq!(options.alt_color(), Color::BLACK);
        assert_eq!(options.new_image_color(), Color::WHITE);
        assert_eq!(options.language(), "en_us");
        assert!(!options.transparency_enabled());
        assert!(!options.show_grid());
        assert!(!options.show_pixel_grid());
    }

    #[test]
    fn cursor_operations_delegate_to_grid_cursor() {
        let mut options = EditorOptions::new();
        options.set_tile_selection(Rect::new(0, 0, 64, 32));
        options.update_cursor_shift();
        assert!(options.cursor_shift().horizontal);
        assert_eq!(options.pos_to_grid(Point::new(50, 10)), Rect::new(48, 0, 32, 32));

        options.move_selection(Point::new(200, 200));
        assert_eq!(options.tile_selection().center(), Point::new(200, 200));

        options.clean_cursor_shift();
        assert_eq!(options.pos_to_grid(Point::new(50, 10)), Rect::new(32, 0, 32, 32));
    }
}
