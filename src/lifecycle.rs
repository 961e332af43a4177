// Mount/unmount of a running field. `start` hands back an owned `Running`
// handle; stopping it (or dropping it) releases the frame callback and the
// resize listener together, and any frame that still fires afterwards is a
// no-op.

use crate::error::Error;
use crate::field::ParticleField;
use crate::scheduler::{FrameScheduler, FrameToken, ResizeToken, ViewportObserver};
use crate::surface::{Bounds, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Scene<S> {
    field: ParticleField,
    surface: S,
}

impl<S: Surface> Scene<S> {
    fn frame(&mut self) {
        let Scene { field, surface } = self;
        field.step(surface.size());
        field.draw(surface);
    }
}

pub struct Running<S: Surface, F: FrameScheduler, V: ViewportObserver> {
    scene: Rc<RefCell<Scene<S>>>,
    mounted: Rc<Cell<bool>>,
    scheduler: F,
    viewport: V,
    frame: Option<FrameToken>,
    resize: Option<ResizeToken>,
}

pub fn start<S, F, V>(
    field: ParticleField,
    surface: S,
    mut scheduler: F,
    mut viewport: V,
) -> Result<Running<S, F, V>, Error>
where
    S: Surface + 'static,
    F: FrameScheduler,
    V: ViewportObserver,
{
    let scene = Rc::new(RefCell::new(Scene { field, surface }));
    let mounted = Rc::new(Cell::new(true));

    let resize = {
        let scene = scene.clone();
        let mounted = mounted.clone();
        viewport.observe(Rc::new(move |bounds: Bounds| {
            if !mounted.get() {
                return;
            }
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.surface.set_size(bounds);
            }
        }))?
    };

    let frame = {
        let scene = scene.clone();
        let mounted = mounted.clone();
        scheduler.schedule(Rc::new(move || {
            if !mounted.get() {
                return;
            }
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.frame();
            }
        }))
    };
    let frame = match frame {
        Ok(token) => token,
        Err(err) => {
            mounted.set(false);
            viewport.unobserve(resize);
            return Err(err);
        }
    };

    Ok(Running {
        scene,
        mounted,
        scheduler,
        viewport,
        frame: Some(frame),
        resize: Some(resize),
    })
}

impl<S: Surface, F: FrameScheduler, V: ViewportObserver> Running<S, F, V> {
    pub fn is_running(&self) -> bool {
        self.mounted.get()
    }

    /// Releases both host registrations. Safe to call more than once.
    pub fn stop(&mut self) {
        self.mounted.set(false);
        if let Some(token) = self.frame.take() {
            self.scheduler.cancel(token);
        }
        if let Some(token) = self.resize.take() {
            self.viewport.unobserve(token);
        }
    }

    /// Sets the surface's pixel dimensions. Particles are left where they
    /// are; the next step wraps them against the new size.
    pub fn resize(&self, bounds: Bounds) {
        if !self.mounted.get() {
            return;
        }
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.surface.set_size(bounds);
        }
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.len()
    }

    pub fn surface_size(&self) -> Bounds {
        self.scene.borrow().surface.size()
    }

    pub fn field(&self) -> ParticleField {
        self.scene.borrow().field.clone()
    }
}

impl<S: Surface, F: FrameScheduler, V: ViewportObserver> Drop for Running<S, F, V> {
    fn drop(&mut self) {
        self.stop();
    }
}
