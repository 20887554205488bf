//! Input source that turns SIGINT and SIGTERM into a quit request.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use novade_compositor_core::{InputEvent, InputSource};
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{debug, info};

/// Wraps another [`InputSource`] and reports [`InputEvent::Quit`] once a
/// termination signal has raised the shared flag.
///
/// While the flag is clear every poll is forwarded to the inner source. Once
/// it is set the inner source is no longer polled.
#[derive(Debug)]
pub struct SignalInput<I> {
    inner: I,
    quit: Arc<AtomicBool>,
}

impl<I: InputSource> SignalInput<I> {
    /// Installs SIGINT and SIGTERM handlers that set the quit flag.
    ///
    /// # Errors
    ///
    /// Fails if a handler cannot be registered with the OS.
    pub fn register(inner: I) -> io::Result<Self> {
        let quit = Arc::new(AtomicBool::new(false));
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&quit))?;
        }
        debug!("Listening for SIGINT/SIGTERM");
        Ok(Self::with_flag(inner, quit))
    }

    /// Uses `quit` as the flag. Storing `true` into it requests shutdown.
    pub fn with_flag(inner: I, quit: Arc<AtomicBool>) -> Self {
        Self { inner, quit }
    }

    pub fn quit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }
}

impl<I: InputSource> InputSource for SignalInput<I> {
    fn poll_input(&mut self) -> Vec<InputEvent> {
        if self.quit.load(Ordering::SeqCst) {
            info!("Termination signal received, requesting quit");
            return vec![InputEvent::Quit];
        }
        self.inner.poll_input()
    }
}
