// Software surface backed by a plain RGBA byte buffer. Rasterizes circles
// itself and can be blitted onto a 2d context in one put_image_data call.
// Output is fully deterministic, which makes it handy for frame snapshots.

use crate::color::Color;
use crate::surface::{Bounds, Surface};
use vecmath::Vector2;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixel_data: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> PixelSurface {
        let mut surface = PixelSurface {
            width,
            height,
            pixel_data: vec![0x00; buffer_len(width, height)],
        };
        surface.clear();
        surface
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.get_pixel_index(x, y).map(|idx| {
            [
                self.pixel_data[idx],
                self.pixel_data[idx + 1],
                self.pixel_data[idx + 2],
                self.pixel_data[idx + 3],
            ]
        })
    }

    pub fn put_image_data(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&self.pixel_data[..]),
            self.width,
            self.height,
        )?;
        ctx.put_image_data(&image_data, 0.0, 0.0)
    }

    fn get_pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: &Color) {
        if let Some(idx) = self.get_pixel_index(x, y) {
            let dst = [
                self.pixel_data[idx],
                self.pixel_data[idx + 1],
                self.pixel_data[idx + 2],
                self.pixel_data[idx + 3],
            ];
            self.pixel_data[idx..idx + 4].copy_from_slice(&color.blend_over(dst));
        }
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.width as f64, self.height as f64)
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.width = bounds.width.max(0.0) as u32;
        self.height = bounds.height.max(0.0) as u32;
        self.pixel_data = vec![0x00; buffer_len(self.width, self.height)];
        self.clear();
    }

    // Opaque black, same as the page background behind the hero
    fn clear(&mut self) {
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0x00, 0x00, 0x00, 0xff]);
        }
    }

    // A pixel is covered when its centre falls inside the circle
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &Color) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (center[0] - radius).floor() as i32;
        let max_x = (center[0] + radius).ceil() as i32;
        let min_y = (center[1] - radius).floor() as i32;
        let max_y = (center[1] + radius).ceil() as i32;
        let radius_sq = radius * radius;
        for pixel_y in min_y..max_y {
            for pixel_x in min_x..max_x {
                let dx = pixel_x as f64 + 0.5 - center[0];
                let dy = pixel_y as f64 + 0.5 - center[1];
                if dx * dx + dy * dy <= radius_sq {
                    self.blend_pixel(pixel_x, pixel_y, color);
                }
            }
        }
    }
}
