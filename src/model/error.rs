use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("image index {index} is out of range for a set of {len} images")]
    OutOfRange { index: usize, len: usize },
}
