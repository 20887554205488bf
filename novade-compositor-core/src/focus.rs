//! Keyboard focus: exactly one window is focused whenever any window exists.

use tracing::info;

use crate::window::{Window, WindowId};

/// Tracks the focused window and keeps the windows' `focused` flags in step
/// with it.
///
/// The manager never owns the windows; every mutating call receives the
/// table's window slice so that the flag and the pointer change together.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusManager {
    focused: Option<WindowId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused window, `None` iff the table is empty.
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Called after a window was appended. Focuses it only if nothing had
    /// focus before, i.e. it is the first window.
    pub(crate) fn window_added(&mut self, windows: &mut [Window]) {
        if self.focused.is_some() {
            return;
        }
        if let Some(first) = windows.first_mut() {
            first.focused = true;
            self.focused = Some(first.id());
            info!("Focused window {}", first.id());
        }
    }

    /// Moves focus to the next window in id order, wrapping around.
    ///
    /// No-op on an empty slice.
    pub(crate) fn focus_next(&mut self, windows: &mut [Window]) -> Option<WindowId> {
        if windows.is_empty() {
            return None;
        }
        let next_index = match self.focused {
            Some(current) => {
                if let Some(window) = windows.get_mut(current.index()) {
                    window.focused = false;
                }
                (current.index() + 1) % windows.len()
            }
            None => 0,
        };
        let next = &mut windows[next_index];
        next.focused = true;
        self.focused = Some(next.id());
        info!("Focused window {}", next.id());
        self.focused
    }
}
