#[cfg(debug_assertions)]
use log::debug;
use glam::Vec3;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;

/// État renvoyé par `Rocket::update`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RocketState {
    /// La fusée monte encore
    Ascending,
    /// La fusée vient d'atteindre son état terminal : explosion à cette position
    Burst(Vec3),
    /// Déjà explosée (ne devrait plus être mise à jour)
    Spent,
}

/// Représentation d’une fusée en phase ascendante
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    /// Position et vitesse courantes
    pub pos: Vec3,
    pub vel: Vec3,

    /// Hauteur d'explosion visée (fixée au lancement)
    target_height: f32,

    /// Secondes écoulées depuis le lancement
    age: f32,

    /// Verrou garantissant une seule transition vers l'explosion
    exploded: bool,
}

impl Rocket {
    pub fn new(pos: Vec3, vel: Vec3, target_height: f32) -> Self {
        Self {
            pos,
            vel,
            target_height,
            age: 0.0,
            exploded: false,
        }
    }

    /// Crée une fusée au point de lancement avec une vitesse et une hauteur cible aléatoires.
    pub fn launch(ground_point: Vec3, cfg: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let lateral = cfg.launch_lateral_speed.abs();
        let vel = Vec3::new(
            rng.random_range(-lateral..=lateral),
            rng.random_range(cfg.launch_min_speed..=cfg.launch_max_speed),
            rng.random_range(-lateral..=lateral),
        );
        let target_height =
            ground_point.y + rng.random_range(cfg.target_height_min..=cfg.target_height_max);

        #[cfg(debug_assertions)]
        debug!(
            "🚀 Rocket launched from ({:.1}, {:.1}, {:.1}), target height {:.1}",
            ground_point.x, ground_point.y, ground_point.z, target_height
        );

        Self::new(ground_point, vel, target_height)
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[inline]
    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    #[inline]
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// Avance la fusée d'un pas `dt` (déjà borné par l'appelant).
    ///
    /// Le freinage vertical (`rocket_drag`) n'est pas la gravité des
    /// particules : la fusée décélère sans retomber avant d'exploser.
    pub fn update(&mut self, dt: f32, cfg: &PhysicConfig) -> RocketState {
        if self.exploded {
            return RocketState::Spent;
        }

        self.age += dt;
        self.pos += self.vel * dt;
        self.vel.y -= cfg.rocket_drag * dt;

        // Une fusée qui n'atteint pas sa cible explose quand même en fin de vie
        if self.pos.y >= self.target_height || self.age > cfg.rocket_lifespan {
            self.exploded = true;
            return RocketState::Burst(self.pos);
        }
        RocketState::Ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spent_rocket_does_not_move() {
        let cfg = PhysicConfig::default();
        let mut rocket = Rocket::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 0.05);

        assert!(matches!(rocket.update(0.01, &cfg), RocketState::Burst(_)));
        let pos = rocket.pos;
        let age = rocket.age();

        assert_eq!(rocket.update(0.01, &cfg), RocketState::Spent);
        assert_eq!(rocket.pos, pos);
        assert_eq!(rocket.age(), age);
    }

    #[test]
    fn test_drag_applied_after_position() {
        let cfg = PhysicConfig::default();
        let mut rocket = Rocket::new(Vec3::ZERO, Vec3::new(1.0, 10.0, 0.0), 1000.0);

        rocket.update(0.5, &cfg);
        assert_eq!(rocket.pos, Vec3::new(0.5, 5.0, 0.0));
        assert_eq!(rocket.vel, Vec3::new(1.0, 10.0 - cfg.rocket_drag * 0.5, 0.0));
    }
}
