use thiserror::Error;

pub type Result<T> = std::result::Result<T, CropError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    #[error("no images loaded")]
    NoImagesLoaded,

    #[error("no crop area selected")]
    NoSelectionDefined,
}
