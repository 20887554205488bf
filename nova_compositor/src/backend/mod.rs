//! Rendering and input backends.
//!
//! - [`software`]: CPU rasterizer into an in-memory framebuffer.
//! - [`headless`]: scripted input for running without a display.
//! - [`signal`]: SIGINT/SIGTERM as a quit request.

pub mod framebuffer;
pub mod headless;
pub mod signal;
pub mod software;

pub use framebuffer::Framebuffer;
pub use headless::ScriptedInput;
pub use signal::SignalInput;
pub use software::SoftwareRenderer;
