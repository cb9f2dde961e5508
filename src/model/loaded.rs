use std::path::{Path, PathBuf};

use image::DynamicImage;

/// A decoded source image. Identity is the path it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    path: PathBuf,
    pixels: DynamicImage,
}

impl LoadedImage {
    pub fn new(path: impl Into<PathBuf>, pixels: DynamicImage) -> Self {
        Self {
            path: path.into(),
            pixels,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
