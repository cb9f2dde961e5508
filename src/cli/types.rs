use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::{MIN_SCALE, SelectionRect};

#[derive(Debug, Parser)]
#[command(
    name = "batch-cropper",
    version,
    about = "Crop a batch of images with one shared rectangle"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the native size of each input image.
    Info {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Crops every input with the same rectangle and writes `cropped_<n>.png` files.
    Crop {
        /// Rectangle `x1,y1,x2,y2` in the coordinates of the images scaled by `--scale`.
        #[arg(long, allow_hyphen_values = true)]
        rect: SelectionRect,
        /// Scale applied to every image before cropping.
        #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
        scale: f32,
        #[arg(long)]
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Opens the cropping window with these images loaded.
    View { inputs: Vec<PathBuf> },
}

pub(super) fn parse_scale(raw: &str) -> Result<f32, String> {
    let scale = raw
        .parse::<f32>()
        .map_err(|error| format!("invalid scale `{raw}`: {error}"))?;
    if !scale.is_finite() || scale < MIN_SCALE {
        return Err(format!("scale must be at least {MIN_SCALE}, got {raw}"));
    }
    Ok(scale)
}

#[derive(Debug, Serialize)]
pub(super) struct ImageInfo {
    pub(super) path: String,
    pub(super) width: u32,
    pub(super) height: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct CropSummary {
    pub(super) written: usize,
    pub(super) output: String,
    pub(super) scale: f32,
    pub(super) rect: SelectionRect,
    pub(super) sizes: Vec<(u32, u32)>,
}
