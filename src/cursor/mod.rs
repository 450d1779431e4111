//! Grid cursor model: cursor and grid sizing, the tile selection, and the
//! pointer-to-grid snapping transform.
//!
//! Cursor dimensions must be at least 1 at all times. The setters store values
//! verbatim, so callers validate first (see [`Size::is_valid_cursor`] and
//! [`validate_cursor_size`]). A degenerate cursor size makes
//! [`GridCursor::update_cursor_shift`] and [`GridCursor::pos_to_grid`] divide by
//! zero.

use thiserror::Error;

use crate::geometry::saturate;
pub use crate::geometry::{Point, Rect, Size};

pub const DEFAULT_CURSOR_SIZE: Size = Size::new(32, 32);
pub const DEFAULT_GRID_SIZE: Size = Size::new(32, 32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor size must be at least 1x1, got {width}x{height}")]
    DegenerateCursorSize { width: i32, height: i32 },
}

pub fn validate_cursor_size(size: Size) -> Result<Size, CursorError> {
    if size.is_valid_cursor() {
        Ok(size)
    } else {
        Err(CursorError::DegenerateCursorSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// Half-cell phase applied to snapping on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorShift {
    pub horizontal: bool,
    pub vertical: bool,
}

impl CursorShift {
    /// A shift is active on an axis when the selection spans an even number of cursor cells.
    pub fn from_selection(selection: Size, cursor: Size) -> Self {
        Self {
            horizontal: selection.width.div_euclid(cursor.width) % 2 == 0,
            vertical: selection.height.div_euclid(cursor.height) % 2 == 0,
        }
    }

    pub const fn offset(self, cursor: Size) -> Point {
        Point::new(
            if self.horizontal { cursor.width / 2 } else { 0 },
            if self.vertical { cursor.height / 2 } else { 0 },
        )
    }
}

/// Snap `pos` to the cursor-sized cell under it, phase-shifted by `shift`.
///
/// Defined for every `i32` position. The cell is computed in `i64`; when its
/// top-left falls outside `i32` (only for the first or last cell at the limits)
/// the corner saturates to `i32::MIN` / `i32::MAX`.
pub fn snap_to_grid(pos: Point, cursor: Size, shift: CursorShift) -> Rect {
    debug_assert!(cursor.is_valid_cursor(), "cursor size must be at least 1x1");
    let offset = shift.offset(cursor);
    let top_left = Point::new(
        snap_axis(pos.x, cursor.width, offset.x),
        snap_axis(pos.y, cursor.height, offset.y),
    );
    Rect::from_parts(top_left, cursor)
}

fn snap_axis(pos: i32, cell: i32, offset: i32) -> i32 {
    let (pos, cell, offset) = (i64::from(pos), i64::from(cell), i64::from(offset));
    saturate((pos + offset).div_euclid(cell) * cell - offset)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCursor {
    cursor_size: Size,
    grid_size: Size,
    tile_selection: Rect,
    shift: CursorShift,
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl GridCursor {
    pub fn new() -> Self {
        Self {
            cursor_size: DEFAULT_CURSOR_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            tile_selection: Rect::from_parts(Point::default(), DEFAULT_CURSOR_SIZE),
            shift: CursorShift::default(),
        }
    }

    pub fn cursor_size(&self) -> Size {
        self.cursor_size
    }

    /// Stored verbatim; `size` must be at least 1x1.
    pub fn set_cursor_size(&mut self, size: Size) {
        debug_assert!(size.is_valid_cursor(), "cursor size must be at least 1x1");
        self.cursor_size = size;
    }

    pub fn grid_size(&self) -> Size {
        self.grid_size
    }

    pub fn set_grid_size(&mut self, size: Size) {
        self.grid_size = size;
    }

    pub fn tile_selection(&self) -> Rect {
        self.tile_selection
    }

    pub fn set_tile_selection(&mut self, selection: Rect) {
        self.tile_selection = selection;
    }

    pub fn shift(&self) -> CursorShift {
        self.shift
    }

    /// Recompute the shift flags from the current selection and cursor sizes.
    ///
    /// Not called automatically: owners call it after changing either size and
    /// before relying on [`GridCursor::pos_to_grid`].
    pub fn update_cursor_shift(&mut self) {
        self.shift = CursorShift::from_selection(self.tile_selection.size(), self.cursor_size);
        tracing::trace!(shift = ?self.shift, "cursor shift updated");
    }

    pub fn clean_cursor_shift(&mut self) {
        self.shift = CursorShift::default();
    }

    pub fn move_selection(&mut self, center: Point) {
        self.tile_selection.move_center(center);
    }

    pub fn pos_to_grid(&self, pos: Point) -> Rect {
        snap_to_grid(pos, self.cursor_size, self.shift)
    }

    /// Put the selection back at the origin with the cursor's size.
    pub(crate) fn reset_selection(&mut self) {
        self.tile_selection.set_size(self.cursor_size);
        self.tile_selection.set_top_left(Point::new(0, 0));
    }
}
