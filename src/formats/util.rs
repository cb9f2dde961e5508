use image::ImageFormat;

pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

const OUTPUT_PREFIX: &str = "cropped";

/// File name for the result at zero-based `index`: `cropped_1.png`, `cropped_2.png`, ...
pub fn output_file_name(index: usize) -> String {
    let extension = OUTPUT_FORMAT.extensions_str().first().copied().unwrap_or("png");
    format!("{OUTPUT_PREFIX}_{}.{extension}", index + 1)
}

/// Extensions offered by the open dialog.
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "bmp", "gif"]
}
