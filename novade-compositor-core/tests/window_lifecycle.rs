//! End-to-end behaviour of the compositor state seen through its public API.

use novade_compositor_core::{
    CompositorError, CompositorState, FrameRenderer, InputEvent, KeyCode, LoopAction, PixelView,
    SurfaceRenderParams, WindowId, MAX_WINDOWS,
};
use novade_core::types::Color;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct SurfaceLog {
    surfaces: Vec<(WindowId, bool, Vec<u8>)>,
    frames: usize,
}

impl FrameRenderer for SurfaceLog {
    fn begin_frame(&mut self, _clear_color: Color) -> novade_compositor_core::Result<()> {
        self.surfaces.clear();
        Ok(())
    }

    fn render_wallpaper(&mut self, _wallpaper: &PixelView<'_>) -> novade_compositor_core::Result<()> {
        Ok(())
    }

    fn render_surface(&mut self, params: &SurfaceRenderParams<'_>) -> novade_compositor_core::Result<()> {
        self.surfaces.push((params.window_id, params.is_focused, params.pixels.to_vec()));
        Ok(())
    }

    fn render_cursor(&mut self, _x: i32, _y: i32, _bitmap: &PixelView<'_>) -> novade_compositor_core::Result<()> {
        Ok(())
    }

    fn present(&mut self) -> novade_compositor_core::Result<()> {
        self.frames += 1;
        Ok(())
    }
}

fn focused_flags(state: &CompositorState) -> Vec<bool> {
    state.windows().iter().map(|w| w.is_focused()).collect()
}

#[test]
fn three_windows_focus_cycle() {
    let mut state = CompositorState::new(1280, 720).unwrap();
    let a = state.create_window(100, 100, "A").unwrap();
    let b = state.create_window(200, 150, "B").unwrap();
    let c = state.create_window(50, 50, "C").unwrap();

    assert_eq!((a, b, c), (WindowId::new(0), WindowId::new(1), WindowId::new(2)));
    assert_eq!(state.windows().len(), 3);
    assert_eq!(state.focused(), Some(a));
    assert_eq!(focused_flags(&state), vec![true, false, false]);

    state.focus_next();
    state.focus_next();
    assert_eq!(state.focused(), Some(c));
    assert_eq!(focused_flags(&state), vec![false, false, true]);

    state.focus_next();
    assert_eq!(state.focused(), Some(a));
    assert_eq!(focused_flags(&state), vec![true, false, false]);
}

#[test]
fn table_rejects_window_past_capacity() {
    let mut state = CompositorState::new(1280, 720).unwrap();
    for i in 0..MAX_WINDOWS {
        assert_eq!(state.create_window(2, 2, "w").unwrap(), WindowId::new(i as u32));
    }
    assert_eq!(
        state.create_window(2, 2, "one too many"),
        Err(CompositorError::CapacityExceeded { capacity: MAX_WINDOWS })
    );
    assert_eq!(state.windows().len(), MAX_WINDOWS);
}

#[test]
fn updated_pixels_reach_the_renderer() {
    let mut state = CompositorState::new(320, 240).unwrap();
    let a = state.create_window(2, 1, "A").unwrap();
    let b = state.create_window(1, 1, "B").unwrap();
    state.update_buffer(a, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

    let mut log = SurfaceLog::default();
    state.present_frame(&mut log).unwrap();
    assert_eq!(
        log.surfaces,
        vec![(a, true, vec![1, 2, 3, 4, 5, 6, 7, 8]), (b, false, vec![0, 0, 0, 0])]
    );

    state.windows_mut().raise(a).unwrap();
    state.windows_mut().set_visible(b, false).unwrap();
    state.present_frame(&mut log).unwrap();
    assert_eq!(log.surfaces, vec![(a, true, vec![1, 2, 3, 4, 5, 6, 7, 8])]);
    assert_eq!(log.frames, 2);
}

#[test]
fn input_sequence_drives_state() {
    let mut state = CompositorState::new(100, 100).unwrap();
    state.create_window(10, 10, "A").unwrap();
    state.create_window(10, 10, "B").unwrap();

    let events = [
        InputEvent::PointerMotion { dx: -5, dy: -5 },
        InputEvent::PointerMotion { dx: 10, dy: 10 },
        InputEvent::PointerMotion { dx: 5, dy: 5 },
        InputEvent::Key(KeyCode::Tab),
    ];
    for event in events {
        assert_eq!(state.handle_input(event), LoopAction::Continue);
    }
    assert_eq!((state.cursor().x(), state.cursor().y()), (15, 15));
    assert_eq!(state.focused(), Some(WindowId::new(1)));
    assert_eq!(state.handle_input(InputEvent::Key(KeyCode::Escape)), LoopAction::Quit);
}
