//! Input events and the source that produces them.

/// Keys the compositor reacts to. Anything else arrives as `Other` with the
/// backend's raw key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Tab,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The backend asked the compositor to shut down (e.g. window closed).
    Quit,
    Key(KeyCode),
    /// Relative pointer movement in pixels.
    PointerMotion { dx: i32, dy: i32 },
}

/// Source of input events, polled once per frame.
pub trait InputSource {
    /// Returns every event that arrived since the last poll, oldest first.
    /// An empty vector means nothing happened.
    fn poll_input(&mut self) -> Vec<InputEvent>;
}
