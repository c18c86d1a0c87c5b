use thiserror::Error;
use wingtip_present::RasterError;

/// Failures that stop the window runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[source] winit::error::OsError),
    #[error("failed to create pixel surface: {0}")]
    Surface(#[source] pixels::Error),
    #[error("failed to resize pixel surface: {0}")]
    Resize(#[source] pixels::TextureError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}
