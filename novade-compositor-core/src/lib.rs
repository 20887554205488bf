//! # Novade Compositor Core
//!
//! The stateful heart of the NovaDE window compositor:
//! - [`window_table`]: fixed-capacity registry of windows with dense ids and an
//!   explicit stacking order.
//! - [`focus`]: the single focused window and cyclic focus advance.
//! - [`cursor`]: the pointer overlay, clamped to the screen.
//! - [`composition`]: walks the windows bottom to top and drives a
//!   [`renderer_interface::FrameRenderer`] to produce one frame.
//! - [`state`]: [`CompositorState`], which ties the above together and applies
//!   [`input::InputEvent`]s.
//!
//! Pixel memory lives in `novade-buffer-manager`; rendering and input are
//! collaborators behind the traits in [`renderer_interface`] and [`input`].

pub mod composition;
pub mod cursor;
pub mod error;
pub mod focus;
pub mod input;
pub mod renderer_interface;
pub mod state;
pub mod window;
pub mod window_table;

pub use composition::{Wallpaper, FOCUSED_BORDER_COLOR, UNFOCUSED_BORDER_COLOR};
pub use cursor::{Cursor, CURSOR_SIZE};
pub use error::{CompositorError, Result};
pub use input::{InputEvent, InputSource, KeyCode};
pub use renderer_interface::{FrameRenderer, PixelView, SurfaceRenderParams};
pub use state::{CompositorState, LoopAction};
pub use window::{Window, WindowId, TITLE_CAPACITY};
pub use window_table::{WindowTable, MAX_WINDOWS};
