// Frame loop state extracted from the canvas component.
// The component owns the requestAnimationFrame plumbing; this decides whether a frame runs.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
    pending: Option<i32>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should request the first frame.
    pub fn start(&mut self) -> bool {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                true
            }
            LoopState::Running | LoopState::Stopped => false,
        }
    }

    /// Runs one frame if the loop is live. Returns true if the next frame should be requested.
    pub fn frame<F: FnOnce()>(&mut self, draw: F) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        draw();
        self.frames += 1;
        true
    }

    /// Stops the loop for good, handing back the outstanding frame request to cancel.
    pub fn stop(&mut self) -> Option<i32> {
        self.state = LoopState::Stopped;
        self.pending.take()
    }

    pub fn set_pending(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
