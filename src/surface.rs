// Drawing surface abstraction. The field only ever asks a surface for its
// size, to be cleared, and to fill circles, so a canvas and an in-memory
// pixel buffer are interchangeable.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }
}

pub trait Surface {
    fn size(&self) -> Bounds;
    fn set_size(&mut self, bounds: Bounds);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &Color);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // None when the canvas can't hand out a 2d context; callers treat that as
    // "nothing to draw on" and skip mounting entirely
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface { canvas, context })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.canvas.set_width(bounds.width.max(0.0) as u32);
        self.canvas.set_height(bounds.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let Bounds { width, height } = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &Color) {
        self.context.begin_path();
        if self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0).is_ok() {
            self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
            self.context.fill();
        }
    }
}
