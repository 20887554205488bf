//! The main entry point for the NovaDE compositor.
//!
//! Loads the configuration, sets up logging from it and runs the frame loop
//! with the software renderer. SIGINT or SIGTERM ends the loop and the process
//! exits with status 0; `max_frames` stops it earlier.

use std::process::ExitCode;

use nova_compositor::backend::{ScriptedInput, SignalInput};
use nova_compositor::error::NovaCompositorError;
use novade_core::config::ConfigLoader;
use novade_core::logging::{init_minimal_logging, initialize_logging};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            init_minimal_logging();
            error!("Configuration loading failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = initialize_logging(&config.logging, false) {
        init_minimal_logging();
        error!("Logging initialization failed: {}", e);
        return ExitCode::FAILURE;
    }
    info!("NovaDE compositor starting");

    let result = SignalInput::register(ScriptedInput::new())
        .map_err(NovaCompositorError::Signals)
        .and_then(|mut input| nova_compositor::run(&config, &mut input));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Compositor stopped with an error: {}", e);
            ExitCode::FAILURE
        }
    }
}
