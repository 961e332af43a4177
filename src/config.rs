// Tunables for the background effect. Defaults match the hero section:
// 200 green-tinted specks drifting at well under a pixel per frame.

use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// 0xRRGGBB hue shared by every particle
    pub hue: u32,
    pub radius: Range<f64>,
    pub alpha: Range<f64>,
    /// Each velocity component is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    /// Wrap every frame in a console timer
    pub profile: bool,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: usize = 200;
    pub const DEFAULT_HUE: u32 = 0x00ff85;

    pub fn with_count(count: usize) -> Self {
        FieldConfig {
            count,
            ..FieldConfig::default()
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            hue: FieldConfig::DEFAULT_HUE,
            radius: 1.0..3.0,
            alpha: 0.1..0.6,
            max_speed: 0.25,
            profile: false,
        }
    }
}
