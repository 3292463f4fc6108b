use glam::Vec3;
use itertools::Itertools;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;

/// Lancement automatique de fusées à intervalle aléatoire (spectacle sans
/// interaction). Inactif si `auto_launch == false`.
#[derive(Debug, Clone, Default)]
pub struct AutoLauncher {
    time_since_last_launch: f32,
    next_interval: f32,
}

impl AutoLauncher {
    pub fn new(cfg: &PhysicConfig, rng: &mut impl Rng) -> Self {
        Self {
            time_since_last_launch: 0.0,
            next_interval: compute_next_interval(cfg, rng),
        }
    }

    #[inline]
    pub fn next_interval(&self) -> f32 {
        self.next_interval
    }

    /// Force un lancement au prochain `tick` (si le lancement auto est actif).
    pub fn force_next_launch(&mut self) {
        self.time_since_last_launch = self.next_interval;
    }

    /// Recalcule l'intervalle après un rechargement de configuration.
    pub fn reset(&mut self, cfg: &PhysicConfig, rng: &mut impl Rng) {
        self.time_since_last_launch = 0.0;
        self.next_interval = compute_next_interval(cfg, rng);
    }

    /// Avance l'horloge ; retourne le point de lancement si une fusée doit partir.
    pub fn tick(&mut self, dt: f32, cfg: &PhysicConfig, rng: &mut impl Rng) -> Option<Vec3> {
        if !cfg.auto_launch {
            return None;
        }

        self.time_since_last_launch += dt;
        if self.time_since_last_launch < self.next_interval {
            return None;
        }

        self.time_since_last_launch = 0.0;
        self.next_interval = compute_next_interval(cfg, rng);

        let spread = cfg.auto_launch_spread.abs();
        Some(Vec3::new(
            rng.random_range(-spread..=spread),
            cfg.ground_height,
            rng.random_range(-spread..=spread),
        ))
    }
}

fn compute_next_interval(cfg: &PhysicConfig, rng: &mut impl Rng) -> f32 {
    let (lo, hi) = [
        cfg.auto_launch_interval_mean - cfg.auto_launch_interval_variation,
        cfg.auto_launch_interval_mean + cfg.auto_launch_interval_variation,
    ]
    .iter()
    .copied()
    .minmax()
    .into_option()
    .unwrap_or((0.0, 0.0));

    rng.random_range(lo..=hi).max(cfg.auto_launch_min_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn auto_config() -> PhysicConfig {
        PhysicConfig {
            auto_launch: true,
            auto_launch_interval_mean: 0.5,
            auto_launch_interval_variation: 0.2,
            auto_launch_min_interval: 0.1,
            auto_launch_spread: 10.0,
            ground_height: -3.0,
            ..PhysicConfig::default()
        }
    }

    #[test]
    fn test_disabled_launcher_never_fires() {
        let cfg = PhysicConfig::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut launcher = AutoLauncher::new(&cfg, &mut rng);
        launcher.force_next_launch();
        for _ in 0..1000 {
            assert!(launcher.tick(0.05, &cfg, &mut rng).is_none());
        }
    }

    #[test]
    fn test_interval_within_bounds() {
        let cfg = auto_config();
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let launcher = AutoLauncher::new(&cfg, &mut rng);
            assert!((0.29..=0.71).contains(&launcher.next_interval()));
        }
    }

    #[test]
    fn test_inverted_variation_still_valid() {
        let cfg = PhysicConfig {
            auto_launch_interval_variation: -0.2,
            ..auto_config()
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let launcher = AutoLauncher::new(&cfg, &mut rng);
        assert!((0.29..=0.71).contains(&launcher.next_interval()));
    }

    #[test]
    fn test_launch_point_on_ground_within_spread() {
        let cfg = auto_config();
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let mut launcher = AutoLauncher::new(&cfg, &mut rng);

        let mut launches = 0;
        for _ in 0..200 {
            if let Some(p) = launcher.tick(0.05, &cfg, &mut rng) {
                launches += 1;
                assert_eq!(p.y, cfg.ground_height);
                assert!(p.x.abs() <= 10.0 && p.z.abs() <= 10.0);
            }
        }
        // 10 s simulées, intervalle max 0.7 s
        assert!(launches >= 12, "only {launches} launches");
    }
}
