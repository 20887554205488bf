//! Global compositor state (`CompositorState`).
//!
//! Owns the window table, the cursor, the screen size and the frame
//! background. It has a single owner, the event loop, which applies input
//! events to it and asks it for a frame once per tick.

use novade_core::config::CompositorConfig;
use novade_core::types::{Color, Size};
use tracing::{debug, info};

use crate::composition::{self, Wallpaper};
use crate::cursor::Cursor;
use crate::error::{CompositorError, Result};
use crate::input::{InputEvent, KeyCode};
use crate::renderer_interface::FrameRenderer;
use crate::window::WindowId;
use crate::window_table::WindowTable;

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct CompositorState {
    windows: WindowTable,
    cursor: Cursor,
    screen: Size<u32>,
    background: Color,
    wallpaper: Option<Wallpaper>,
}

impl CompositorState {
    /// Creates an empty compositor for a `width x height` screen with a black
    /// background and a white cursor.
    pub fn new(screen_width: u32, screen_height: u32) -> Result<Self> {
        Self::with_colors(screen_width, screen_height, Color::BLACK, Color::WHITE)
    }

    /// Creates an empty compositor from the `[compositor]` configuration
    /// section. `demo_windows` are left to the caller.
    pub fn from_config(config: &CompositorConfig) -> Result<Self> {
        Self::with_colors(
            config.screen_width,
            config.screen_height,
            config.background_color,
            config.cursor_color,
        )
    }

    fn with_colors(screen_width: u32, screen_height: u32, background: Color, cursor_color: Color) -> Result<Self> {
        if screen_width == 0 || screen_height == 0 {
            return Err(CompositorError::InvalidDimensions { width: screen_width, height: screen_height });
        }
        let mut cursor = Cursor::new(cursor_color);
        cursor.set_bounds(screen_width, screen_height);
        info!(screen_width, screen_height, "Compositor state initialized");
        Ok(Self {
            windows: WindowTable::new(),
            cursor,
            screen: Size::new(screen_width, screen_height),
            background,
            wallpaper: None,
        })
    }

    pub fn screen_size(&self) -> Size<u32> {
        self.screen
    }

    pub fn windows(&self) -> &WindowTable {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowTable {
        &mut self.windows
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Sets or clears the wallpaper.
    pub fn set_wallpaper(&mut self, wallpaper: Option<Wallpaper>) {
        debug!(has_wallpaper = wallpaper.is_some(), "Wallpaper changed");
        self.wallpaper = wallpaper;
    }

    pub fn wallpaper(&self) -> Option<&Wallpaper> {
        self.wallpaper.as_ref()
    }

    pub fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<WindowId> {
        self.windows.create_window(width, height, title)
    }

    pub fn update_buffer(&self, id: WindowId, source: &[u8]) -> Result<()> {
        self.windows.update_buffer(id, source)
    }

    pub fn focus_next(&mut self) -> Option<WindowId> {
        self.windows.focus_next()
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.windows.focused()
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor.move_by(dx, dy);
    }

    /// Applies one input event.
    ///
    /// `Quit` and `Escape` ask the loop to stop, `Tab` cycles focus, pointer
    /// motion moves the cursor. Other keys are ignored.
    pub fn handle_input(&mut self, event: InputEvent) -> LoopAction {
        match event {
            InputEvent::Quit | InputEvent::Key(KeyCode::Escape) => {
                info!(?event, "Quit requested");
                return LoopAction::Quit;
            }
            InputEvent::Key(KeyCode::Tab) => {
                self.focus_next();
            }
            InputEvent::Key(KeyCode::Other(code)) => {
                debug!(code, "Ignoring key");
            }
            InputEvent::PointerMotion { dx, dy } => self.move_cursor(dx, dy),
        }
        LoopAction::Continue
    }

    /// Draws all visible windows in stacking order.
    pub fn render_all(&self, renderer: &mut dyn FrameRenderer) -> Result<()> {
        composition::render_all(&self.windows, renderer)
    }

    /// Produces and presents one full frame.
    pub fn present_frame(&self, renderer: &mut dyn FrameRenderer) -> Result<()> {
        composition::present_frame(
            &self.windows,
            &self.cursor,
            self.background,
            self.wallpaper.as_ref(),
            renderer,
        )
    }
}
