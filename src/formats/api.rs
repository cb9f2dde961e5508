use std::fs;
use std::path::{Path, PathBuf};

use crate::crop::CropResults;
use crate::model::LoadedImage;

use super::util::output_file_name;
use super::{DefaultImageCodec, ImageReader, ImageWriter, IoError, Result};

/// Decodes every path, failing as a whole on the first unreadable one.
pub fn read_images(paths: &[PathBuf]) -> Result<Vec<LoadedImage>> {
    read_images_with(&DefaultImageCodec, paths)
}

pub fn read_images_with(reader: &impl ImageReader, paths: &[PathBuf]) -> Result<Vec<LoadedImage>> {
    paths.iter().map(|path| reader.read(path)).collect()
}

/// Writes each result as `cropped_<n>.png` into `directory`, replacing files
/// of the same name. Stops at the first failed write; files written before
/// it stay on disk.
pub fn export_results(results: &CropResults, directory: impl AsRef<Path>) -> Result<usize> {
    export_results_with(&DefaultImageCodec, results, directory)
}

pub fn export_results_with(
    writer: &impl ImageWriter,
    results: &CropResults,
    directory: impl AsRef<Path>,
) -> Result<usize> {
    if results.is_empty() {
        return Err(IoError::NothingToExport);
    }

    let directory = directory.as_ref();
    fs::create_dir_all(directory).map_err(|source| IoError::OutputDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    for (index, image) in results.iter().enumerate() {
        let path = directory.join(output_file_name(index));
        writer.write(&path, image)?;
        log::debug!("wrote {}", path.display());
    }

    log::info!("exported {} images to {}", results.len(), directory.display());
    Ok(results.len())
}
