use eframe::egui;

use crate::model::{ViewState, scaled_dimensions};

/// Mapping between the three coordinate spaces of the canvas for one image:
///
/// - native: the image's own pixel grid
/// - canvas: native multiplied by the scale, independent of scrolling
/// - viewport: canvas minus the scroll offset, relative to the widget origin
///
/// Built from the current [`ViewState`] on every render and never stored,
/// so it cannot drift from the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    native_width: u32,
    native_height: u32,
    scale: f32,
    offset: egui::Vec2,
}

impl ViewTransform {
    pub fn new(native_size: (u32, u32), view: &ViewState) -> Self {
        Self {
            native_width: native_size.0,
            native_height: native_size.1,
            scale: view.scale(),
            offset: view.offset,
        }
    }

    pub fn rendered_size(&self) -> (u32, u32) {
        scaled_dimensions(self.native_width, self.native_height, self.scale)
    }

    /// Rendered size as a float vector, i.e. the extent of the scroll region.
    pub fn content_size(&self) -> egui::Vec2 {
        let (width, height) = self.rendered_size();
        egui::vec2(width as f32, height as f32)
    }

    pub fn native_to_viewport(&self, native: egui::Pos2) -> egui::Pos2 {
        (native.to_vec2() * self.scale - self.offset).to_pos2()
    }

    pub fn viewport_to_native(&self, viewport: egui::Pos2) -> egui::Pos2 {
        ((viewport.to_vec2() + self.offset) / self.scale).to_pos2()
    }

    pub fn viewport_to_canvas(&self, viewport: egui::Pos2) -> egui::Pos2 {
        viewport + self.offset
    }

    pub fn canvas_to_viewport(&self, canvas: egui::Pos2) -> egui::Pos2 {
        canvas - self.offset
    }

    pub fn native_to_canvas(&self, native: egui::Pos2) -> egui::Pos2 {
        (native.to_vec2() * self.scale).to_pos2()
    }

    pub fn canvas_to_native(&self, canvas: egui::Pos2) -> egui::Pos2 {
        (canvas.to_vec2() / self.scale).to_pos2()
    }

    /// Where the rendered image sits inside a widget whose top-left is `origin`.
    pub fn image_rect(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(origin - self.offset, self.content_size())
    }
}
