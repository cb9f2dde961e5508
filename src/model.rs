mod error;
mod image_set;
mod loaded;
mod rect;
mod view;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use image_set::ImageSet;
pub use loaded::LoadedImage;
pub use rect::{ParseRectError, SelectionRect};
pub use view::{MIN_SCALE, ViewState, ZOOM_STEP, ZoomStep, scaled_dimensions};
