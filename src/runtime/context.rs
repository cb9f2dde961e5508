use std::path::{Path, PathBuf};

use eframe::egui;

use crate::crop::{self, CropResults};
use crate::interaction::{SelectionTracker, ViewTransform};
use crate::model::{ImageSet, SelectionRect, ViewState};

use super::{IoService, RenderFrame, Result};

/// All mutable state of one cropping session.
///
/// Operations only change state and raise a render request; drawing is left
/// to whoever polls [`CropSession::take_render_request`].
#[derive(Debug, Default)]
pub struct CropSession {
    io_service: IoService,
    images: ImageSet,
    view: ViewState,
    selection: SelectionTracker,
    results: CropResults,
    viewport: egui::Vec2,
    render_requested: bool,
}

impl CropSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(view: ViewState) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn results(&self) -> &CropResults {
        &self.results
    }

    pub fn viewport(&self) -> egui::Vec2 {
        self.viewport
    }

    /// Loads a new batch. An empty path list is a no-op and returns 0; a
    /// failure leaves the previous batch in place.
    pub fn load_images(&mut self, paths: &[PathBuf]) -> Result<usize> {
        if paths.is_empty() {
            return Ok(0);
        }
        let loaded = self.io_service.read_all(paths)?;
        let count = loaded.len();
        self.images.replace(loaded);
        self.view.offset = egui::Vec2::ZERO;
        self.request_render();
        log::info!("loaded {count} images");
        Ok(count)
    }

    pub fn select_image(&mut self, index: usize) -> Result<()> {
        self.images.select_active(index)?;
        self.clamp_offset();
        self.request_render();
        Ok(())
    }

    /// One wheel event. The zoom is kept when the active image changes.
    pub fn zoom_wheel(&mut self, delta: f32) -> bool {
        if delta == 0.0 {
            return false;
        }
        let changed = self.view.apply_wheel(delta);
        self.clamp_offset();
        self.request_render();
        changed
    }

    /// Records the new viewport extent. Scale and offset are left alone.
    pub fn notify_resized(&mut self, viewport: egui::Vec2) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.request_render();
        }
    }

    pub fn pointer_pressed(&mut self, viewport_point: egui::Pos2) {
        self.selection.press(viewport_point + self.view.offset);
        self.request_render();
    }

    pub fn pointer_dragged(&mut self, viewport_point: egui::Pos2) -> bool {
        let content = self.content_size();
        let moved = self
            .selection
            .drag(viewport_point, self.viewport, &mut self.view, content);
        if moved {
            self.request_render();
        }
        moved
    }

    pub fn pointer_released(&mut self) {
        self.selection.release();
    }

    pub fn pan_by(&mut self, delta: egui::Vec2) {
        let content = self.content_size();
        self.view.scroll_by(delta, content, self.viewport);
        self.request_render();
    }

    /// Crops the whole batch with the current rectangle and zoom. Earlier
    /// results are replaced only when this succeeds.
    pub fn crop_all(&mut self) -> Result<usize> {
        let rect = self.selection.rect();
        self.crop_with(&rect)
    }

    pub fn crop_with(&mut self, rect: &SelectionRect) -> Result<usize> {
        let results = crop::crop_all(&self.images, rect, &self.view)?;
        let count = results.len();
        self.results = results;
        Ok(count)
    }

    pub fn export(&self, directory: impl AsRef<Path>) -> Result<usize> {
        self.io_service.export(&self.results, directory)
    }

    pub fn transform(&self) -> Option<ViewTransform> {
        self.images
            .active()
            .map(|image| ViewTransform::new(image.dimensions(), &self.view))
    }

    pub fn render_frame(&self) -> Option<RenderFrame> {
        let image_index = self.images.active_index()?;
        let transform = self.transform()?;
        let rect = self.selection.rect();
        Some(RenderFrame {
            image_index,
            transform,
            selection: (!rect.is_unset()).then_some(rect),
        })
    }

    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    fn content_size(&self) -> egui::Vec2 {
        self.transform()
            .map(|transform| transform.content_size())
            .unwrap_or(egui::Vec2::ZERO)
    }

    fn clamp_offset(&mut self) {
        let content = self.content_size();
        self.view.scroll_by(egui::Vec2::ZERO, content, self.viewport);
    }
}
