use std::path::Path;

use image::DynamicImage;
use image::error::{ImageError, ParameterError, ParameterErrorKind};

use crate::model::LoadedImage;

use super::{IoError, OUTPUT_FORMAT, Result};

pub trait ImageReader {
    fn read(&self, path: &Path) -> Result<LoadedImage>;
}

pub trait ImageWriter {
    fn write(&self, path: &Path, image: &DynamicImage) -> Result<()>;
}

/// Decodes anything the `image` crate recognises and encodes PNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultImageCodec;

impl ImageReader for DefaultImageCodec {
    fn read(&self, path: &Path) -> Result<LoadedImage> {
        let pixels = image::open(path).map_err(|source| IoError::UnreadableImage {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedImage::new(path, pixels))
    }
}

impl ImageWriter for DefaultImageCodec {
    fn write(&self, path: &Path, image: &DynamicImage) -> Result<()> {
        if image.width() == 0 || image.height() == 0 {
            return Err(IoError::WriteFailure {
                path: path.to_path_buf(),
                source: ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )),
            });
        }
        image
            .save_with_format(path, OUTPUT_FORMAT)
            .map_err(|source| IoError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })
    }
}
