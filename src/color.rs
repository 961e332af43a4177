// Simple color struct, created from an unsigned 32 representing 0xRRGGBB
// plus a floating point alpha, the way a canvas fill style expects it

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn from_rgb_u32(num: u32, a: f64) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    // Source-over blend of this color onto an opaque RGBA pixel
    pub fn blend_over(&self, dst: [u8; 4]) -> [u8; 4] {
        let a = self.a.max(0.0).min(1.0);
        let mix = |src: u8, dst: u8| -> u8 {
            (src as f64 * a + dst as f64 * (1.0 - a)).round() as u8
        };
        [mix(self.r, dst[0]), mix(self.g, dst[1]), mix(self.b, dst[2]), dst[3]]
    }
}
