use eframe::egui;

use crate::model::{SelectionRect, ViewState};

/// Distance from a viewport edge at which a drag starts scrolling.
pub const EDGE_MARGIN: f32 = 20.0;
/// Canvas units scrolled per auto-scroll step.
pub const SCROLL_UNIT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging,
}

/// Lifecycle of the single crop rectangle.
///
/// A press always starts over, dropping whatever was committed before.
/// Releasing commits the rectangle as drawn, without normalizing or
/// clamping it.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    state: SelectionState,
    rect: SelectionRect,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == SelectionState::Dragging
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    pub fn press(&mut self, canvas: egui::Pos2) {
        self.rect = SelectionRect::at_point(canvas.x, canvas.y);
        self.state = SelectionState::Dragging;
    }

    /// Moves the free corner to the pointer.
    ///
    /// Near an edge the view scrolls one unit first and the corner is taken
    /// from the scrolled offset, so it matches what is under the cursor in
    /// the next frame. Returns `false` when no drag is in progress.
    pub fn drag(
        &mut self,
        viewport_point: egui::Pos2,
        viewport_size: egui::Vec2,
        view: &mut ViewState,
        content_size: egui::Vec2,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }

        let step = edge_scroll(viewport_point, viewport_size, EDGE_MARGIN);
        if step != egui::Vec2::ZERO {
            view.scroll_by(step * SCROLL_UNIT, content_size, viewport_size);
        }

        let canvas = viewport_point + view.offset;
        self.rect.x2 = canvas.x;
        self.rect.y2 = canvas.y;
        true
    }

    pub fn release(&mut self) {
        self.state = SelectionState::Idle;
    }
}

/// Scroll direction (-1, 0 or 1 per axis) for a pointer near the viewport edges.
pub fn edge_scroll(point: egui::Pos2, viewport: egui::Vec2, margin: f32) -> egui::Vec2 {
    let axis = |position: f32, extent: f32| {
        if position < margin {
            -1.0
        } else if position > extent - margin {
            1.0
        } else {
            0.0
        }
    };
    egui::vec2(axis(point.x, viewport.x), axis(point.y, viewport.y))
}
