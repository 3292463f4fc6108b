use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Une particule d'explosion (masse ponctuelle).
///
/// La couleur et la durée de vie sont fixées à la création ; seules la
/// position et la vitesse évoluent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Couleur RGB dans [0, 1]
    pub color: Vec3,
    /// Durée de vie individuelle (jitterée autour de la durée nominale)
    pub lifespan: f32,
    pub alive: bool,
}

impl Particle {
    /// Intègre la particule (Euler explicite) tant que l'âge de l'explosion
    /// ne dépasse pas sa durée de vie individuelle.
    ///
    /// Une particule morte reste figée : sa position n'a plus de sens.
    #[inline(always)]
    pub fn update(&mut self, dt: f32, gravity_y: f32, explosion_age: f32) {
        if !self.alive {
            return;
        }
        if explosion_age > self.lifespan {
            self.alive = false;
            return;
        }
        self.vel.y += gravity_y * dt;
        self.pos += self.vel * dt;
    }
}

/// Tire une vitesse de direction uniforme sur la sphère et de norme
/// uniforme dans `[0, max_speed)`.
///
/// `phi = acos(2u - 1)` évite l'accumulation de points aux pôles qu'on
/// obtiendrait en tirant `phi` uniformément.
pub fn random_sphere_velocity(rng: &mut impl Rng, max_speed: f32) -> Vec3 {
    let theta = rng.random_range(0.0..TAU);
    let u: f32 = rng.random();
    let phi = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();
    let speed = rng.random::<f32>() * max_speed;

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta) * speed
}
