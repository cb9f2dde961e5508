use eframe::egui;
use image::DynamicImage;

pub(super) const THUMBNAIL_SIZE: u32 = 100;

/// Converts an image for upload, shrinking it when it exceeds `max_side`.
/// The canvas always paints at the transform's rendered size, so a smaller
/// texture only costs sharpness.
pub(super) fn to_color_image(image: &DynamicImage, max_side: usize) -> egui::ColorImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX).max(1);
    let rgba = if image.width() > max_side || image.height() > max_side {
        image.thumbnail(max_side, max_side).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

pub(super) fn thumbnail(image: &DynamicImage) -> egui::ColorImage {
    let rgba = image.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbaImage};

    use super::{THUMBNAIL_SIZE, thumbnail, to_color_image};

    #[test]
    fn oversized_images_are_shrunk_for_upload() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(400, 100));
        assert_eq!(to_color_image(&image, 200).size, [200, 50]);
        assert_eq!(to_color_image(&image, 4_096).size, [400, 100]);
    }

    #[test]
    fn thumbnails_fit_the_strip() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(300, 150));
        let preview = thumbnail(&image);
        assert_eq!(preview.size, [THUMBNAIL_SIZE as usize, 50]);
    }
}
