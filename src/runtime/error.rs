use crate::crop::CropError;
use crate::formats::IoError;
use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Io(#[from] IoError),
}
