mod batch;
mod error;


pub use batch::{CropResults, RESIZE_FILTER, crop_all, crop_image};
pub use error::{CropError, Result};
