// Simple particle struct to keep track of individual position, velocity, radius, and color.
// Only the position ever changes once a particle exists.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::surface::Bounds;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    radius: f64,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * bounds.width;
        let pos_y = rng.gen::<f64>() * bounds.height;
        let min_vel = -config.max_speed;
        let max_vel = config.max_speed;
        let vel_x = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let vel_y = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let radius = rng.gen::<f64>() * (config.radius.end - config.radius.start) + config.radius.start;
        let alpha = rng.gen::<f64>() * (config.alpha.end - config.alpha.start) + config.alpha.start;
        let color = Color::from_rgb_u32(config.hue, alpha);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, color)
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Moves by one frame of velocity, then teleports to the opposite edge on
    // each axis that left the bounds. Velocity is never touched.
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 {
            self.pos[0] = bounds.width;
        }
        if self.pos[0] > bounds.width {
            self.pos[0] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = bounds.height;
        }
        if self.pos[1] > bounds.height {
            self.pos[1] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn green(a: f64) -> Color {
        Color::from_rgb_u32(FieldConfig::DEFAULT_HUE, a)
    }

    #[test]
    fn moves_without_wrapping_inside_bounds() {
        let mut p = Particle::new([50.0, 50.0], [0.1, -0.1], 2.0, green(0.3));
        p.advance(Bounds::new(100.0, 100.0));
        assert!((p.pos()[0] - 50.1).abs() < 1e-9);
        assert!((p.pos()[1] - 49.9).abs() < 1e-9);
        assert_eq!(p.vel(), [0.1, -0.1]);
    }

    #[test]
    fn wraps_left_edge_to_right_edge() {
        let mut p = Particle::new([-0.1, 10.0], [-0.2, 0.0], 2.0, green(0.3));
        p.advance(Bounds::new(100.0, 100.0));
        assert_eq!(p.pos()[0], 100.0);
        assert_eq!(p.vel()[0], -0.2);
    }

    #[test]
    fn wraps_right_and_bottom_edges_to_zero() {
        let mut p = Particle::new([99.9, 79.95], [0.2, 0.1], 1.0, green(0.3));
        p.advance(Bounds::new(100.0, 80.0));
        assert_eq!(p.pos(), [0.0, 0.0]);
        assert_eq!(p.vel(), [0.2, 0.1]);
    }

    #[test]
    fn wraps_top_edge_to_bottom_edge() {
        let mut p = Particle::new([5.0, 0.05], [0.0, -0.1], 1.0, green(0.3));
        p.advance(Bounds::new(100.0, 80.0));
        assert_eq!(p.pos(), [5.0, 80.0]);
    }

    #[test]
    fn random_particles_respect_configured_ranges() {
        let config = FieldConfig::default();
        let bounds = Bounds::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, bounds, &config);
            assert!(p.pos()[0] >= 0.0 && p.pos()[0] < 640.0);
            assert!(p.pos()[1] >= 0.0 && p.pos()[1] < 480.0);
            assert!(p.radius() >= 1.0 && p.radius() < 3.0);
            assert!(p.color().a >= 0.1 && p.color().a < 0.6);
            assert_eq!((p.color().r, p.color().g, p.color().b), (0, 255, 133));
            for v in p.vel().iter() {
                assert!(*v >= -0.25 && *v < 0.25);
            }
        }
    }

    #[test]
    fn random_particle_on_empty_surface_sits_at_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = Particle::random(&mut rng, Bounds::new(0.0, 0.0), &FieldConfig::default());
        assert_eq!(p.pos(), [0.0, 0.0]);
    }
}
