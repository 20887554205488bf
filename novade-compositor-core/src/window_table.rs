//! Fixed-capacity window registry.
//!
//! Ids are dense: the n-th window created gets id `n - 1`, and because there
//! is no deletion the id doubles as the index into the table. Draw order is
//! kept separately in a stacking list, so raising or lowering a window never
//! renumbers anything.

use novade_buffer_manager::{BufferManager, SharedBuffer};
use novade_core::types::RectInt;
use tracing::{debug, info};

use crate::error::{CompositorError, Result};
use crate::focus::FocusManager;
use crate::window::{Window, WindowId};

/// Maximum number of windows a table holds.
pub const MAX_WINDOWS: usize = 128;

const CASCADE_ORIGIN: i32 = 100;
const CASCADE_STEP: i32 = 20;

/// The window table together with the focus pointer and the buffer store
/// backing every window.
#[derive(Debug, Default)]
pub struct WindowTable {
    windows: Vec<Window>,
    /// Bottom to top.
    stacking: Vec<WindowId>,
    focus: FocusManager,
    buffers: BufferManager,
}

impl WindowTable {
    /// An empty table with no focused window.
    pub fn new() -> Self {
        Self {
            windows: Vec::with_capacity(MAX_WINDOWS),
            stacking: Vec::with_capacity(MAX_WINDOWS),
            focus: FocusManager::new(),
            buffers: BufferManager::new(),
        }
    }

    /// Creates a `width x height` window with a zero-filled buffer.
    ///
    /// The window is placed at `(100 + id * 20, 100 + id * 20)`, is visible,
    /// goes on top of the stack and is focused only if it is the first window.
    ///
    /// # Errors
    ///
    /// - [`CompositorError::CapacityExceeded`] when [`MAX_WINDOWS`] windows exist.
    /// - [`CompositorError::InvalidDimensions`] when a dimension is zero.
    /// - [`CompositorError::AllocationFailure`] when the buffer cannot be allocated.
    ///
    /// The table is unchanged on error.
    pub fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<WindowId> {
        if self.windows.len() >= MAX_WINDOWS {
            return Err(CompositorError::CapacityExceeded { capacity: MAX_WINDOWS });
        }
        let buffer = self.buffers.allocate(width, height)?;

        let id = WindowId::new(self.windows.len() as u32);
        let offset = CASCADE_ORIGIN + id.as_u32() as i32 * CASCADE_STEP;
        let window = Window::new(id, RectInt::from_coords(offset, offset, width, height), title, buffer);
        info!("Created window {} ({})", id, window.title());

        self.windows.push(window);
        self.stacking.push(id);
        self.focus.window_added(&mut self.windows);
        Ok(id)
    }

    /// Replaces window `id`'s pixels with `source`, byte for byte.
    ///
    /// Takes `&self`: the write is serialized by the window's own buffer lock.
    ///
    /// # Errors
    ///
    /// [`CompositorError::InvalidHandle`] for an unknown id and
    /// [`CompositorError::SizeMismatch`] unless `source` is exactly
    /// `width * height * 4` bytes.
    pub fn update_buffer(&self, id: WindowId, source: &[u8]) -> Result<()> {
        let window = self.get(id)?;
        self.buffers.update(window.buffer_id(), source)?;
        debug!(window = %id, bytes = source.len(), "Updated window buffer");
        Ok(())
    }

    pub fn get(&self, id: WindowId) -> Result<&Window> {
        self.windows.get(id.index()).ok_or(CompositorError::InvalidHandle(id))
    }

    /// Shared handle to window `id`'s pixel buffer.
    pub fn buffer(&self, id: WindowId) -> Result<SharedBuffer> {
        let window = self.get(id)?;
        Ok(self.buffers.get(window.buffer_id())?)
    }

    pub fn set_visible(&mut self, id: WindowId, visible: bool) -> Result<()> {
        let window = self
            .windows
            .get_mut(id.index())
            .ok_or(CompositorError::InvalidHandle(id))?;
        window.visible = visible;
        debug!(window = %id, visible, "Changed window visibility");
        Ok(())
    }

    /// Moves window `id` to the top of the stack.
    pub fn raise(&mut self, id: WindowId) -> Result<()> {
        let pos = self.stack_position(id)?;
        let id = self.stacking.remove(pos);
        self.stacking.push(id);
        debug!(window = %id, "Raised window");
        Ok(())
    }

    /// Moves window `id` to the bottom of the stack.
    pub fn lower(&mut self, id: WindowId) -> Result<()> {
        let pos = self.stack_position(id)?;
        let id = self.stacking.remove(pos);
        self.stacking.insert(0, id);
        debug!(window = %id, "Lowered window");
        Ok(())
    }

    /// Window ids in draw order, bottom first.
    pub fn stacking_order(&self) -> &[WindowId] {
        &self.stacking
    }

    fn stack_position(&self, id: WindowId) -> Result<usize> {
        self.stacking
            .iter()
            .position(|&stacked| stacked == id)
            .ok_or(CompositorError::InvalidHandle(id))
    }

    /// Advances focus to the next window in id order, wrapping around.
    /// Returns the newly focused window, or `None` if the table is empty.
    pub fn focus_next(&mut self) -> Option<WindowId> {
        self.focus.focus_next(&mut self.windows)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focus.focused()
    }

    /// Windows in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
