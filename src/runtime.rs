mod context;
mod error;
mod io_service;
mod render;

#[cfg(test)]
mod tests;

pub use context::CropSession;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use render::RenderFrame;
