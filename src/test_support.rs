// Recording stand-ins for the host: a surface that logs draw calls, a frame
// scheduler that only fires when told to, and a viewport that resizes on
// demand. Clones share state so a test can keep a handle after moving one
// into `lifecycle::start`.

use crate::color::Color;
use crate::error::Error;
use crate::scheduler::{
    FrameCallback, FrameScheduler, FrameToken, ResizeCallback, ResizeToken, ViewportObserver,
};
use crate::surface::{Bounds, Surface};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Circle(Vector2<f64>, f64, Color),
}

#[derive(Clone)]
pub struct RecordingSurface {
    size: Rc<Cell<Bounds>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingSurface {
    pub fn new(size: Bounds) -> Self {
        RecordingSurface {
            size: Rc::new(Cell::new(size)),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Bounds {
        self.size.get()
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.size.set(bounds);
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push(Call::Clear);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &Color) {
        self.calls
            .borrow_mut()
            .push(Call::Circle(center, radius, *color));
    }
}

#[derive(Default)]
struct SchedulerState {
    fail: bool,
    next_token: u32,
    active: BTreeMap<u32, FrameCallback>,
    everything: Vec<FrameCallback>,
    cancelled: usize,
}

#[derive(Clone, Default)]
pub struct MockScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl MockScheduler {
    pub fn new() -> Self {
        MockScheduler::default()
    }

    pub fn failing() -> Self {
        let scheduler = MockScheduler::default();
        scheduler.state.borrow_mut().fail = true;
        scheduler
    }

    pub fn active(&self) -> usize {
        self.state.borrow().active.len()
    }

    pub fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }

    /// Callbacks currently registered, as a pending frame would see them.
    pub fn captured(&self) -> Vec<FrameCallback> {
        self.state.borrow().active.values().cloned().collect()
    }

    /// Every callback ever registered, cancelled or not.
    pub fn captured_all(&self) -> Vec<FrameCallback> {
        self.state.borrow().everything.clone()
    }

    /// Simulates one display refresh.
    pub fn fire(&self) {
        for callback in self.captured() {
            callback();
        }
    }
}

impl FrameScheduler for MockScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> Result<FrameToken, Error> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(Error::FrameScheduling("scheduler unavailable".to_owned()));
        }
        let token = state.next_token;
        state.next_token += 1;
        state.active.insert(token, callback.clone());
        state.everything.push(callback);
        Ok(FrameToken(token))
    }

    fn cancel(&mut self, token: FrameToken) {
        let mut state = self.state.borrow_mut();
        if state.active.remove(&token.0).is_some() {
            state.cancelled += 1;
        }
    }
}

struct ViewportState {
    fail: bool,
    size: Bounds,
    next_token: u32,
    active: BTreeMap<u32, ResizeCallback>,
}

#[derive(Clone)]
pub struct MockViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl MockViewport {
    pub fn new(size: Bounds) -> Self {
        MockViewport {
            state: Rc::new(RefCell::new(ViewportState {
                fail: false,
                size,
                next_token: 0,
                active: BTreeMap::new(),
            })),
        }
    }

    pub fn failing(size: Bounds) -> Self {
        let viewport = MockViewport::new(size);
        viewport.state.borrow_mut().fail = true;
        viewport
    }

    pub fn active(&self) -> usize {
        self.state.borrow().active.len()
    }

    pub fn resize(&self, size: Bounds) {
        let callbacks: Vec<ResizeCallback> = {
            let mut state = self.state.borrow_mut();
            state.size = size;
            state.active.values().cloned().collect()
        };
        for callback in callbacks {
            callback(size);
        }
    }
}

impl ViewportObserver for MockViewport {
    fn current(&self) -> Option<Bounds> {
        Some(self.state.borrow().size)
    }

    fn observe(&mut self, callback: ResizeCallback) -> Result<ResizeToken, Error> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(Error::ResizeListener("resize events unavailable".to_owned()));
        }
        let token = state.next_token;
        state.next_token += 1;
        state.active.insert(token, callback);
        Ok(ResizeToken(token))
    }

    fn unobserve(&mut self, token: ResizeToken) {
        self.state.borrow_mut().active.remove(&token.0);
    }
}
