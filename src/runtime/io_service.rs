use std::path::{Path, PathBuf};

use crate::crop::CropResults;
use crate::formats::{export_results, read_images};
use crate::model::LoadedImage;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService;

impl IoService {
    pub fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<LoadedImage>> {
        Ok(read_images(paths)?)
    }

    pub fn export(&self, results: &CropResults, directory: impl AsRef<Path>) -> Result<usize> {
        Ok(export_results(results, directory)?)
    }
}
