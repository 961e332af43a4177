//! Ambient particle background for the landing page hero section.
//!
//! A fixed set of faint green specks drifts across a canvas, wrapping at the
//! edges. The host page hands over its canvas element and keeps the returned
//! [`ParticleBackground`] alive for as long as the section is mounted.

mod utils;

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod particle;
pub mod pixel_surface;
pub mod scheduler;
pub mod surface;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::lifecycle::Running;
use crate::scheduler::{AnimationFrameScheduler, ViewportObserver, WindowResizeObserver};
use crate::surface::{CanvasSurface, Surface};
use crate::utils::{console_log, console_warn};

pub use crate::config::FieldConfig;
pub use crate::error::Error;
pub use crate::field::ParticleField;
pub use crate::surface::Bounds;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

type CanvasAnimation = Running<CanvasSurface, AnimationFrameScheduler, WindowResizeObserver>;

#[wasm_bindgen]
pub struct ParticleBackground {
    running: Option<CanvasAnimation>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Sizes `canvas` to the window and starts drifting `count` particles
    /// across it. Without a window or a 2d context this returns an inert
    /// background that schedules nothing.
    pub fn mount(canvas: HtmlCanvasElement, count: u32) -> ParticleBackground {
        ParticleBackground::mount_with_config(canvas, FieldConfig::with_count(count as usize))
    }

    pub fn mount_profiled(canvas: HtmlCanvasElement, count: u32) -> ParticleBackground {
        let config = FieldConfig {
            profile: true,
            ..FieldConfig::with_count(count as usize)
        };
        ParticleBackground::mount_with_config(canvas, config)
    }

    pub fn unmount(&mut self) {
        if let Some(mut running) = self.running.take() {
            running.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().map_or(false, |r| r.is_running())
    }

    pub fn particle_count(&self) -> usize {
        self.running.as_ref().map_or(0, |r| r.particle_count())
    }
}

impl ParticleBackground {
    pub fn mount_with_config(canvas: HtmlCanvasElement, config: FieldConfig) -> ParticleBackground {
        let running = match try_mount(canvas, &config) {
            Ok(Some(running)) => {
                console_log!("particle background mounted with {} particles", config.count);
                Some(running)
            }
            Ok(None) => {
                console_warn!("particle background disabled: no window or 2d context");
                None
            }
            Err(err) => {
                console_warn!("particle background disabled: {}", err);
                None
            }
        };
        ParticleBackground { running }
    }
}

fn try_mount(canvas: HtmlCanvasElement, config: &FieldConfig) -> Result<Option<CanvasAnimation>, Error> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Ok(None),
    };
    let mut surface = match CanvasSurface::new(canvas) {
        Some(surface) => surface,
        None => return Ok(None),
    };

    let viewport = WindowResizeObserver::new(window.clone());
    let bounds = viewport.current().unwrap_or_else(|| surface.size());
    surface.set_size(bounds);

    let field = ParticleField::create_with_rng(&mut rand::thread_rng(), bounds, config);
    let scheduler = AnimationFrameScheduler::new(window).with_profiling(config.profile);
    lifecycle::start(field, surface, scheduler, viewport).map(Some)
}
