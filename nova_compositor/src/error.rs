use std::io;
use std::path::PathBuf;

use novade_compositor_core::CompositorError;
use novade_core::CoreError;
use thiserror::Error;

/// Errors that end the compositor process.
#[derive(Debug, Error)]
pub enum NovaCompositorError {
    #[error("Core setup failed: {0}")]
    Core(#[from] CoreError),

    #[error("Compositor error: {0}")]
    Compositor(#[from] CompositorError),

    #[error("Failed to read wallpaper '{}': {source}", path.display())]
    WallpaperRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install signal handlers: {0}")]
    Signals(#[source] io::Error),
}
