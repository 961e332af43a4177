use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};
use rand::Rng;

/// A fixed-size set of drifting particles.
///
/// The set is filled once by [`ParticleField::create`] and never grows or
/// shrinks afterwards. [`ParticleField::step`] only moves particles and
/// [`ParticleField::draw`] only reads them, so a frame is always a step
/// followed by a draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn create(count: usize, width: f64, height: f64) -> ParticleField {
        let config = FieldConfig::with_count(count);
        ParticleField::create_with_rng(&mut rand::thread_rng(), Bounds::new(width, height), &config)
    }

    pub fn create_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: Bounds,
        config: &FieldConfig,
    ) -> ParticleField {
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            particles.push(Particle::random(rng, bounds, config));
        }
        ParticleField { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> ParticleField {
        ParticleField { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances every particle by its velocity and wraps it against `bounds`.
    pub fn step(&mut self, bounds: Bounds) {
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }

    /// Clears `surface`, then fills one circle per particle in set order.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(particle.pos(), particle.radius(), &particle.color());
        }
    }
}
