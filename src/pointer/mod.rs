//! Pointer bookkeeping for the image editing widget.
//!
//! The toolkit forwards raw press/move/release positions (already in image
//! coordinates); the tracker snaps them through the options' grid cursor and
//! keeps the drag selection the widget outlines.

use crate::geometry::{Point, Rect};
use crate::options::EditorOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerTracker {
    pressed: bool,
    anchor: Rect,
    current: Point,
    selection: Rect,
}

/// The image area around a selection, split into four non-overlapping pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OuterSelection {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl OuterSelection {
    pub const fn as_array(&self) -> [Rect; 4] {
        [self.top, self.bottom, self.left, self.right]
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn current_position(&self) -> Point {
        self.current
    }

    pub fn selection(&self) -> Rect {
        self.selection
    }

    /// Record the position and return the cursor outline under it.
    pub fn pointer_moved(&mut self, options: &EditorOptions, pos: Point) -> Rect {
        self.current = pos;
        let cell = options.pos_to_grid(pos);
        if self.pressed {
            self.selection = self.anchor.united(cell);
        }
        cell
    }

    pub fn pointer_pressed(&mut self, options: &EditorOptions, pos: Point) -> Rect {
        self.current = pos;
        self.pressed = true;
        self.anchor = options.pos_to_grid(pos);
        self.selection = self.anchor;
        tracing::trace!(anchor = ?self.anchor, "pointer drag started");
        self.anchor
    }

    /// End the drag and return the final selection. A release without a press is ignored.
    pub fn pointer_released(&mut self, options: &EditorOptions, pos: Point) -> Rect {
        if self.pressed {
            self.pointer_moved(options, pos);
            self.pressed = false;
            tracing::trace!(selection = ?self.selection, "pointer drag finished");
        } else {
            self.current = pos;
        }
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.pressed = false;
        self.selection = Rect::default();
    }

    /// Split `image` minus the selection into top, bottom, left and right pieces.
    ///
    /// Top and bottom span the full image width; left and right only cover the
    /// selection's rows. Pieces outside the image are empty.
    pub fn outer_selection(&self, image: Rect) -> OuterSelection {
        let inner = self.selection.intersected(image);
        if inner.is_empty() {
            return OuterSelection {
                top: image,
                ..OuterSelection::default()
            };
        }

        // `inner` lies inside `image`, so every extent below is non-negative.
        let top = Rect::new(
            image.x,
            image.y,
            image.width,
            inner.y.saturating_sub(image.y),
        );
        let bottom = Rect::new(
            image.x,
            inner.bottom().saturating_add(1),
            image.width,
            image.bottom().saturating_sub(inner.bottom()),
        );
        let left = Rect::new(
            image.x,
            inner.y,
            inner.x.saturating_sub(image.x),
            inner.height,
        );
        let right = Rect::new(
            inner.right().saturating_add(1),
            inner.y,
            image.right().saturating_sub(inner.right()),
            inner.height,
        );

        OuterSelection {
            top,
            bottom,
            left,
            right,
        }
    }
}
