use image::DynamicImage;
use image::imageops::FilterType;

use crate::model::{ImageSet, SelectionRect, ViewState, scaled_dimensions};

use super::{CropError, Result};

/// Filter used when bringing each image to the preview scale before cropping.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Output of one batch crop, index-aligned with the image set it came from.
#[derive(Debug, Clone, Default)]
pub struct CropResults {
    images: Vec<DynamicImage>,
}

impl CropResults {
    pub fn new(images: Vec<DynamicImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DynamicImage> {
        self.images.iter()
    }

    pub fn dimensions(&self) -> Vec<(u32, u32)> {
        self.images
            .iter()
            .map(|image| (image.width(), image.height()))
            .collect()
    }
}

/// Crops every image in `images` with the same canvas-space rectangle.
///
/// Each image is first resized by the view's current scale, the same one the
/// active image is previewed at, and the rectangle is then cut from that
/// resized image. Images with different native sizes therefore produce crops
/// from differently scaled content.
pub fn crop_all(images: &ImageSet, rect: &SelectionRect, view: &ViewState) -> Result<CropResults> {
    if images.is_empty() {
        return Err(CropError::NoImagesLoaded);
    }
    if rect.is_unset() {
        return Err(CropError::NoSelectionDefined);
    }

    let scale = view.scale();
    let cropped = images
        .iter()
        .map(|image| crop_image(image.pixels(), rect, scale))
        .collect::<Vec<_>>();

    log::info!(
        "cropped {} images with rect ({rect}) at scale {scale:.2}",
        cropped.len()
    );
    Ok(CropResults::new(cropped))
}

/// Resizes one image to `scale` and cuts `rect` out of it.
///
/// Corners are rounded to whole pixels. The first corner is the top-left
/// anchor, clamped at zero. A second corner left of or above the first gives
/// an empty image. Anything past the resized bounds is clipped off.
pub fn crop_image(source: &DynamicImage, rect: &SelectionRect, scale: f32) -> DynamicImage {
    let (width, height) = scaled_dimensions(source.width(), source.height(), scale);
    let resized = if (width, height) == (source.width(), source.height()) {
        source.clone()
    } else {
        source.resize_exact(width, height, RESIZE_FILTER)
    };

    let left = rect.x1.round().max(0.0);
    let top = rect.y1.round().max(0.0);
    let crop_width = (rect.x2.round() - left).max(0.0);
    let crop_height = (rect.y2.round() - top).max(0.0);

    resized.crop_imm(
        left as u32,
        top as u32,
        crop_width as u32,
        crop_height as u32,
    )
}
