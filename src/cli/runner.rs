use clap::Parser;

use crate::model::ViewState;
use crate::runtime::{CropSession, IoService};

use super::types::{Cli, Commands, CropSummary, ImageInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { inputs } => {
            let images = IoService
                .read_all(&inputs)
                .map_err(|error| error.to_string())?;
            let info = images
                .iter()
                .map(|image| ImageInfo {
                    path: image.path().display().to_string(),
                    width: image.width(),
                    height: image.height(),
                })
                .collect::<Vec<_>>();
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Crop {
            rect,
            scale,
            output,
            inputs,
        } => {
            let mut session = CropSession::with_view(ViewState::with_scale(scale));
            session
                .load_images(&inputs)
                .map_err(|error| error.to_string())?;
            session
                .crop_with(&rect)
                .map_err(|error| error.to_string())?;
            let written = session
                .export(&output)
                .map_err(|error| error.to_string())?;
            let summary = CropSummary {
                written,
                output: output.display().to_string(),
                scale: session.view().scale(),
                rect,
                sizes: session.results().dimensions(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).map_err(|error| error.to_string())?
            );
        }
        Commands::View { inputs } => {
            crate::ui::run(inputs)?;
        }
    }

    Ok(())
}
