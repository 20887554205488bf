//! A single compositor window.

use std::fmt;

use novade_buffer_manager::BufferId;
use novade_core::types::RectInt;
use novade_core::utils::truncate_to_byte_limit;

/// Longest title kept, in bytes. Longer titles are cut at a character boundary.
pub const TITLE_CAPACITY: usize = 63;

/// Dense window handle: the index of the window in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    pub const fn new(raw: u32) -> Self {
        WindowId(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window: geometry, title, visibility, focus flag and the buffer holding
/// its pixels.
///
/// Windows are created by [`crate::WindowTable::create_window`] and never
/// resized or destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    geometry: RectInt,
    title: String,
    pub(crate) visible: bool,
    pub(crate) focused: bool,
    buffer: BufferId,
}

impl Window {
    pub(crate) fn new(id: WindowId, geometry: RectInt, title: &str, buffer: BufferId) -> Self {
        Self {
            id,
            geometry,
            title: truncate_to_byte_limit(title, TITLE_CAPACITY).to_owned(),
            visible: true,
            focused: false,
            buffer,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn geometry(&self) -> RectInt {
        self.geometry
    }

    pub fn x(&self) -> i32 {
        self.geometry.x
    }

    pub fn y(&self) -> i32 {
        self.geometry.y
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn buffer_id(&self) -> BufferId {
        self.buffer
    }
}
