use eframe::egui;

pub const MIN_SCALE: f32 = 0.1;
pub const ZOOM_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

impl ZoomStep {
    /// Maps a signed vertical wheel delta to a zoom direction.
    pub fn from_wheel(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Zoom and scroll state of the canvas. One instance is shared by every
/// image in the set, so switching the active image keeps the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    scale: f32,
    pub offset: egui::Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: egui::Vec2::ZERO,
        }
    }
}

impl ViewState {
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale: clamp_scale(scale),
            ..Self::default()
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom(&mut self, step: ZoomStep) {
        let next = match step {
            ZoomStep::In => self.scale + ZOOM_STEP,
            ZoomStep::Out => self.scale - ZOOM_STEP,
        };
        // Repeated f32 steps drift off the decimal grid (0.5 becomes 0.4999999).
        self.scale = clamp_scale(as_decimal(next) as f32);
    }

    /// Applies one wheel tick. Returns whether the scale changed.
    pub fn apply_wheel(&mut self, delta: f32) -> bool {
        let Some(step) = ZoomStep::from_wheel(delta) else {
            return false;
        };
        let before = self.scale;
        self.zoom(step);
        self.scale != before
    }

    /// Moves the offset, keeping it inside the scroll region spanned by the
    /// rendered content.
    pub fn scroll_by(&mut self, delta: egui::Vec2, content: egui::Vec2, viewport: egui::Vec2) {
        let max = (content - viewport).max(egui::Vec2::ZERO);
        self.offset = (self.offset + delta).clamp(egui::Vec2::ZERO, max);
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.max(MIN_SCALE)
    } else {
        MIN_SCALE
    }
}

/// Pixel size of an image drawn at `scale`. Preview and batch crop both go
/// through this so a rectangle drawn on screen lands on the same pixels.
///
/// The scale is taken in millionths and the product is floored in integers,
/// so 90 px at 0.7 is 63 px and not 62.
pub fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let micros = (f64::from(scale) * MICROS).round().max(0.0) as u64;
    let scale_axis = |native: u32| {
        let scaled = u64::from(native) * micros / MICROS as u64;
        u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
    };
    (scale_axis(width), scale_axis(height))
}

const MICROS: f64 = 1e6;

/// `scale` rounded to six decimals.
fn as_decimal(scale: f32) -> f64 {
    (f64::from(scale) * MICROS).round() / MICROS
}
