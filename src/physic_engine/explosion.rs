use glam::Vec3;
use palette::{FromColor, Hsl, Srgb};
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::{random_sphere_velocity, Particle};

/// État renvoyé par `Explosion::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionState {
    Burning,
    Expired,
}

/// Nuage de particules issu de l'explosion d'une fusée.
///
/// Le nombre de particules est fixé à la création ; le nuage entier est
/// détruit d'un bloc quand `age > lifespan`. L'opacité est un scalaire
/// unique pour tout le nuage (un seul draw call côté rendu).
#[derive(Debug, Clone)]
pub struct Explosion {
    center: Vec3,
    particles: Vec<Particle>,
    base_hue: f32,
    age: f32,
    lifespan: f32,
    opacity: f32,
}

impl Explosion {
    /// Génère atomiquement les `particle_count` particules au point `center`.
    pub fn new(center: Vec3, cfg: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let base_hue: f32 = rng.random();
        let jitter = cfg.color_jitter.abs();
        let lifespan_jitter = cfg.particle_lifespan_jitter.abs();

        let particles = (0..cfg.particle_count)
            .map(|_| {
                let hue = base_hue + rng.random_range(-jitter..=jitter);
                let lightness = cfg.color_lightness + rng.random_range(-jitter..=jitter);
                Particle {
                    pos: center,
                    vel: random_sphere_velocity(rng, cfg.particle_initial_speed),
                    color: hsl_to_rgb(hue, cfg.color_saturation, lightness),
                    lifespan: cfg.particle_lifespan
                        * rng.random_range((1.0 - lifespan_jitter)..=(1.0 + lifespan_jitter)),
                    alive: true,
                }
            })
            .collect();

        Self {
            center,
            particles,
            base_hue,
            age: 0.0,
            lifespan: cfg.particle_lifespan,
            opacity: 1.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[inline]
    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    #[inline]
    pub fn base_hue(&self) -> f32 {
        self.base_hue
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particules encore vivantes (les seules dont la position est significative)
    pub fn alive_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.alive)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.lifespan
    }

    /// Avance le nuage d'un pas `dt` (déjà borné par l'appelant).
    pub fn update(&mut self, dt: f32, gravity_y: f32) -> ExplosionState {
        self.age += dt;

        for p in &mut self.particles {
            p.update(dt, gravity_y, self.age);
        }

        self.opacity = fade(self.age, self.lifespan);

        if self.is_expired() {
            ExplosionState::Expired
        } else {
            ExplosionState::Burning
        }
    }
}

/// Fondu quadratique : `max(0, 1 - (age / lifespan)²)`, borné à `[0, 1]`.
#[inline]
pub fn fade(age: f32, lifespan: f32) -> f32 {
    if lifespan <= 0.0 {
        return 0.0;
    }
    let ratio = age.max(0.0) / lifespan;
    (1.0 - ratio * ratio).clamp(0.0, 1.0)
}

/// Conversion HSL (teinte normalisée, qui boucle) vers RGB.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let hsl: Hsl = Hsl::new(
        hue.rem_euclid(1.0) * 360.0,
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    );
    let rgb: Srgb = Srgb::from_color(hsl);
    Vec3::new(rgb.red, rgb.green, rgb.blue).clamp(Vec3::ZERO, Vec3::ONE)
}
