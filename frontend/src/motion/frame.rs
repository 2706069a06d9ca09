use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

/// Per-controller frame bookkeeping.
///
/// Any number of events between two frames collapse into one pending frame.
/// Once detached, late frame callbacks are ignored.
#[derive(Debug)]
pub struct FrameGate {
    pending: bool,
    attached: bool,
    runs: u64,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            pending: false,
            attached: true,
            runs: 0,
        }
    }

    /// Records an event. Returns true when the caller must request a frame.
    pub fn on_event(&mut self) -> bool {
        if !self.attached || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback. Returns true when the computation
    /// should run.
    pub fn on_frame(&mut self) -> bool {
        if !self.attached || !self.pending {
            return false;
        }
        self.pending = false;
        self.runs += 1;
        true
    }

    /// Called when requesting the frame failed, so the next event retries.
    pub fn abandon(&mut self) {
        self.pending = false;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }
}

struct FrameLoopInner {
    gate: FrameGate,
    handle: Option<AnimationFrame>,
    tick: Box<dyn FnMut()>,
}

/// Browser side of [`FrameGate`]: coalesces calls to [`FrameLoop::poke`] into
/// one `requestAnimationFrame` and runs `tick` in it. Dropping the loop
/// cancels the pending frame.
pub struct FrameLoop {
    inner: Rc<RefCell<FrameLoopInner>>,
}

impl FrameLoop {
    pub fn new(tick: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FrameLoopInner {
                gate: FrameGate::new(),
                handle: None,
                tick: Box::new(tick),
            })),
        }
    }

    pub fn poke(&self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            // Poked from inside our own tick; the frame being processed covers it.
            return;
        };
        if !inner.gate.on_event() {
            return;
        }
        let weak: Weak<RefCell<FrameLoopInner>> = Rc::downgrade(&self.inner);
        inner.handle = Some(request_animation_frame(move |_timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut inner) = inner.try_borrow_mut() else {
                return;
            };
            inner.handle = None;
            if inner.gate.on_frame() {
                (inner.tick)();
            }
        }));
    }

    /// Runs the computation immediately, outside of any frame.
    pub fn run_now(&self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            if inner.gate.is_attached() {
                (inner.tick)();
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.gate.detach();
            // Dropping the handle cancels the frame request.
            inner.handle.take();
        }
    }
}
