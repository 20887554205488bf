//! Single-threaded run-to-completion frame loop.
//!
//! Each tick polls the input source, applies every event to the compositor
//! state, presents one frame and sleeps for whatever is left of the frame
//! interval. Drift is accepted: a slow frame simply shortens the sleep.

use std::thread;
use std::time::{Duration, Instant};

use novade_compositor_core::{CompositorState, FrameRenderer, InputSource, LoopAction, Result};
use novade_core::config::CompositorConfig;
use tracing::{debug, info};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented.
    pub frames: u64,
    /// `true` if a quit event stopped the loop, `false` if the frame limit did.
    pub quit_requested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLoop {
    frame_interval: Duration,
    max_frames: Option<u64>,
}

impl EventLoop {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            max_frames: None,
        }
    }

    pub fn from_config(config: &CompositorConfig) -> Self {
        Self::new(Duration::from_millis(config.frame_interval_ms)).with_max_frames(config.max_frames)
    }

    /// Stops after `max_frames` frames; `None` runs until a quit event.
    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Polls input once and applies it. A quit event stops processing the
    /// rest of the batch and no frame is drawn for this tick.
    pub fn dispatch(
        &self,
        state: &mut CompositorState,
        renderer: &mut dyn FrameRenderer,
        input: &mut dyn InputSource,
    ) -> Result<LoopAction> {
        for event in input.poll_input() {
            if state.handle_input(event) == LoopAction::Quit {
                return Ok(LoopAction::Quit);
            }
        }
        state.present_frame(renderer)?;
        Ok(LoopAction::Continue)
    }

    /// Runs ticks until a quit event or the frame limit.
    ///
    /// # Errors
    ///
    /// The first renderer error ends the loop and is returned.
    pub fn run(
        &self,
        state: &mut CompositorState,
        renderer: &mut dyn FrameRenderer,
        input: &mut dyn InputSource,
    ) -> Result<RunSummary> {
        info!(interval = ?self.frame_interval, max_frames = ?self.max_frames, "Starting event loop");
        let mut frames = 0u64;
        loop {
            if self.max_frames.is_some_and(|max| frames >= max) {
                info!(frames, "Frame limit reached");
                return Ok(RunSummary { frames, quit_requested: false });
            }

            let tick_start = Instant::now();
            if self.dispatch(state, renderer, input)? == LoopAction::Quit {
                info!(frames, "Event loop stopped");
                return Ok(RunSummary { frames, quit_requested: true });
            }
            frames += 1;

            match self.frame_interval.checked_sub(tick_start.elapsed()) {
                Some(remaining) => thread::sleep(remaining),
                None => debug!(frame = frames, "Frame took longer than the frame interval"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ScriptedInput, SoftwareRenderer};
    use novade_compositor_core::{InputEvent, KeyCode, WindowId};
    use pretty_assertions::assert_eq;

    fn fast_loop() -> EventLoop {
        EventLoop::new(Duration::from_millis(1))
    }

    #[test]
    fn test_quit_stops_before_drawing() {
        let mut state = CompositorState::new(64, 64).unwrap();
        let mut renderer = SoftwareRenderer::new(64, 64).unwrap();
        let mut input = ScriptedInput::new();
        input.push(InputEvent::Key(KeyCode::Tab));
        input.push(InputEvent::Quit);

        let summary = fast_loop().run(&mut state, &mut renderer, &mut input).unwrap();
        assert_eq!(summary, RunSummary { frames: 1, quit_requested: true });
        assert_eq!(renderer.frames_presented(), 1);
    }

    #[test]
    fn test_escape_ends_loop_and_skips_rest_of_batch() {
        let mut state = CompositorState::new(64, 64).unwrap();
        let mut renderer = SoftwareRenderer::new(64, 64).unwrap();
        let mut input = ScriptedInput::new();
        input.push_batch([
            InputEvent::PointerMotion { dx: 3, dy: 3 },
            InputEvent::Key(KeyCode::Escape),
            InputEvent::PointerMotion { dx: 10, dy: 10 },
        ]);

        let summary = fast_loop().run(&mut state, &mut renderer, &mut input).unwrap();
        assert!(summary.quit_requested);
        assert_eq!(summary.frames, 0);
        assert_eq!((state.cursor().x(), state.cursor().y()), (3, 3));
    }

    #[test]
    fn test_max_frames_limit() {
        let mut state = CompositorState::new(32, 32).unwrap();
        state.create_window(4, 4, "a").unwrap();
        state.create_window(4, 4, "b").unwrap();
        let mut renderer = SoftwareRenderer::new(32, 32).unwrap();
        let mut input = ScriptedInput::new();
        input.push(InputEvent::Key(KeyCode::Tab));

        let summary = fast_loop()
            .with_max_frames(Some(3))
            .run(&mut state, &mut renderer, &mut input)
            .unwrap();
        assert_eq!(summary, RunSummary { frames: 3, quit_requested: false });
        assert_eq!(renderer.frames_presented(), 3);
        assert_eq!(state.focused(), Some(WindowId::new(1)));
    }

    #[test]
    fn test_from_config() {
        let config = CompositorConfig {
            frame_interval_ms: 33,
            max_frames: Some(10),
            ..CompositorConfig::default()
        };
        let event_loop = EventLoop::from_config(&config);
        assert_eq!(
            event_loop,
            EventLoop::new(Duration::from_millis(33)).with_max_frames(Some(10))
        );
    }
}
