mod api;
mod codec;
mod error;
mod util;


pub use api::{export_results, export_results_with, read_images, read_images_with};
pub use codec::{DefaultImageCodec, ImageReader, ImageWriter};
pub use error::{IoError, Result};
pub use util::{OUTPUT_FORMAT, output_file_name, supported_extensions};
