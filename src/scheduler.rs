// Host capabilities the animation needs: something that calls us back once
// per display refresh, and something that tells us when the viewport
// changes size. Both hand back a token so the registration can be released.

use crate::error::{self, Error};
use crate::surface::Bounds;
use crate::utils::Timer;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type FrameCallback = Rc<dyn Fn()>;
pub type ResizeCallback = Rc<dyn Fn(Bounds)>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizeToken(pub u32);

pub trait FrameScheduler {
    /// Runs `callback` once per display refresh until the token is cancelled.
    fn schedule(&mut self, callback: FrameCallback) -> Result<FrameToken, Error>;
    fn cancel(&mut self, token: FrameToken);
}

pub trait ViewportObserver {
    fn current(&self) -> Option<Bounds>;
    /// Calls `callback` with the new viewport size on every resize until the
    /// token is released.
    fn observe(&mut self, callback: ResizeCallback) -> Result<ResizeToken, Error>;
    fn unobserve(&mut self, token: ResizeToken);
}

struct FrameLoop {
    request_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

// requestAnimationFrame only ever fires once, so each registration keeps a
// closure that re-requests itself after running the callback. Cancelling
// drops the closure; a weak handle means an in-flight frame can't revive it.
pub struct AnimationFrameScheduler {
    window: Window,
    profile: bool,
    next_token: u32,
    loops: HashMap<FrameToken, FrameLoop>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        AnimationFrameScheduler {
            window,
            profile: false,
            next_token: 0,
            loops: HashMap::new(),
        }
    }

    pub fn with_profiling(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> Result<FrameToken, Error> {
        let request_id = Rc::new(Cell::new(None));
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = self.window.clone();
            let request_id = request_id.clone();
            let slot = Rc::downgrade(&slot);
            let profile = self.profile;
            Closure::wrap(Box::new(move || {
                request_id.set(None);
                {
                    let _timer = if profile {
                        Some(Timer::new("ParticleField::frame"))
                    } else {
                        None
                    };
                    callback();
                }
                let slot = match slot.upgrade() {
                    Some(slot) => slot,
                    None => return,
                };
                let slot = slot.borrow();
                if let Some(closure) = slot.as_ref() {
                    if let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                        request_id.set(Some(id));
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let id = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| Error::FrameScheduling(error::describe(&e)))?;
        request_id.set(Some(id));
        *slot.borrow_mut() = Some(closure);

        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.loops.insert(
            token,
            FrameLoop {
                request_id,
                closure: slot,
            },
        );
        Ok(token)
    }

    fn cancel(&mut self, token: FrameToken) {
        if let Some(frame_loop) = self.loops.remove(&token) {
            if let Some(id) = frame_loop.request_id.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            frame_loop.closure.borrow_mut().take();
        }
    }
}

impl Drop for AnimationFrameScheduler {
    fn drop(&mut self) {
        let tokens: Vec<FrameToken> = self.loops.keys().copied().collect();
        for token in tokens {
            self.cancel(token);
        }
    }
}

pub fn viewport_size(window: &Window) -> Option<Bounds> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Bounds::new(width, height))
}

pub struct WindowResizeObserver {
    window: Window,
    next_token: u32,
    listeners: HashMap<ResizeToken, Closure<dyn FnMut()>>,
}

impl WindowResizeObserver {
    pub fn new(window: Window) -> Self {
        WindowResizeObserver {
            window,
            next_token: 0,
            listeners: HashMap::new(),
        }
    }
}

impl ViewportObserver for WindowResizeObserver {
    fn current(&self) -> Option<Bounds> {
        viewport_size(&self.window)
    }

    fn observe(&mut self, callback: ResizeCallback) -> Result<ResizeToken, Error> {
        let closure = {
            let window = self.window.clone();
            Closure::wrap(Box::new(move || {
                if let Some(bounds) = viewport_size(&window) {
                    callback(bounds);
                }
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| Error::ResizeListener(error::describe(&e)))?;

        let token = ResizeToken(self.next_token);
        self.next_token += 1;
        self.listeners.insert(token, closure);
        Ok(token)
    }

    fn unobserve(&mut self, token: ResizeToken) {
        if let Some(closure) = self.listeners.remove(&token) {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowResizeObserver {
    fn drop(&mut self) {
        let tokens: Vec<ResizeToken> = self.listeners.keys().copied().collect();
        for token in tokens {
            self.unobserve(token);
        }
    }
}
