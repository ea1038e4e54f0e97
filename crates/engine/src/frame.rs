//! One frame: integrate time, apply input, clear, draw.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::core::{render_cube, FrameBuffer, Projector, RenderError, SceneStats};
use crate::state::RenderState;
use crate::types::CubeAction;

/// Outcome of [`Engine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The framebuffer holds a fresh frame.
    Drawn(SceneStats),
    /// A quit action arrived; nothing was drawn.
    Quit,
}

/// Single owner of the render state and the framebuffer.
pub struct Engine {
    state: RenderState,
    fb: FrameBuffer,
}

impl Engine {
    pub fn new(width: u16, height: u16, state: RenderState) -> Result<Self, RenderError> {
        Ok(Self {
            state,
            fb: FrameBuffer::try_new(width, height)?,
        })
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Advance by `elapsed`, apply at most one action, then redraw.
    pub fn tick(&mut self, elapsed: Duration, action: Option<CubeAction>) -> Tick {
        self.state.advance(elapsed);
        if let Some(action) = action {
            if let ControlFlow::Break(()) = self.state.apply(action) {
                return Tick::Quit;
            }
        }
        Tick::Drawn(self.draw())
    }

    /// Clear and redraw the current state without advancing it.
    pub fn draw(&mut self) -> SceneStats {
        self.fb.clear();
        let projector = Projector::for_framebuffer(&self.fb, self.state.zoom);
        render_cube(
            &mut self.fb,
            projector,
            self.state.orientation,
            self.state.time,
        )
    }
}
