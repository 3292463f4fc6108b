use anyhow::{bail, Result};
use serde::Deserialize;

/// Borne haute absolue du pas de temps (s) : `max_dt` ne peut pas la dépasser.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Constantes de la simulation.
///
/// Les valeurs par défaut sont celles du spectacle ; un fichier TOML (partiel)
/// peut les surcharger au démarrage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    // Pas de temps
    pub min_dt: f32,
    pub max_dt: f32,

    // Fusées
    pub rocket_drag: f32,
    pub rocket_lifespan: f32,
    pub launch_min_speed: f32,
    pub launch_max_speed: f32,
    pub launch_lateral_speed: f32,
    pub target_height_min: f32,
    pub target_height_max: f32,

    // Explosions
    pub particle_count: usize,
    pub particle_lifespan: f32,
    pub particle_initial_speed: f32,
    pub particle_lifespan_jitter: f32,
    pub gravity_y: f32,
    pub color_saturation: f32,
    pub color_lightness: f32,
    pub color_jitter: f32,

    // Scène
    pub ground_height: f32,

    // Lancement automatique
    pub auto_launch: bool,
    pub auto_launch_interval_mean: f32,
    pub auto_launch_interval_variation: f32,
    pub auto_launch_min_interval: f32,
    pub auto_launch_spread: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            min_dt: 1.0e-4,
            max_dt: MAX_FRAME_DT,
            rocket_drag: 2.0,
            rocket_lifespan: 3.0,
            launch_min_speed: 55.0,
            launch_max_speed: 70.0,
            launch_lateral_speed: 4.0,
            target_height_min: 80.0,
            target_height_max: 120.0,
            particle_count: 300,
            particle_lifespan: 2.0,
            particle_initial_speed: 25.0,
            particle_lifespan_jitter: 0.2, // lifespan individuelle dans [0.8, 1.2] × particle_lifespan
            gravity_y: -9.8,
            color_saturation: 1.0,
            color_lightness: 0.6,
            color_jitter: 0.1,
            ground_height: 0.0,
            auto_launch: false,
            auto_launch_interval_mean: 0.8,
            auto_launch_interval_variation: 0.5,
            auto_launch_min_interval: 0.1,
            auto_launch_spread: 60.0,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Champs flottants, pour le contrôle NaN / infini
    fn float_fields(&self) -> [(&'static str, f32); 21] {
        [
            ("min_dt", self.min_dt),
            ("max_dt", self.max_dt),
            ("rocket_drag", self.rocket_drag),
            ("rocket_lifespan", self.rocket_lifespan),
            ("launch_min_speed", self.launch_min_speed),
            ("launch_max_speed", self.launch_max_speed),
            ("launch_lateral_speed", self.launch_lateral_speed),
            ("target_height_min", self.target_height_min),
            ("target_height_max", self.target_height_max),
            ("particle_lifespan", self.particle_lifespan),
            ("particle_initial_speed", self.particle_initial_speed),
            ("particle_lifespan_jitter", self.particle_lifespan_jitter),
            ("gravity_y", self.gravity_y),
            ("color_saturation", self.color_saturation),
            ("color_lightness", self.color_lightness),
            ("color_jitter", self.color_jitter),
            ("ground_height", self.ground_height),
            ("auto_launch_interval_mean", self.auto_launch_interval_mean),
            (
                "auto_launch_interval_variation",
                self.auto_launch_interval_variation,
            ),
            ("auto_launch_min_interval", self.auto_launch_min_interval),
            ("auto_launch_spread", self.auto_launch_spread),
        ]
    }

    /// Rejette les combinaisons qui rendraient la simulation incohérente.
    pub fn validate(&self) -> Result<()> {
        // Une comparaison avec NaN est toujours fausse : on filtre d'abord
        if let Some((name, value)) = self
            .float_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            bail!("{name} must be finite, got {value}");
        }
        if !(self.min_dt > 0.0 && self.min_dt <= self.max_dt && self.max_dt <= MAX_FRAME_DT) {
            bail!(
                "invalid time step bounds: min_dt={} max_dt={} (max_dt <= {})",
                self.min_dt,
                self.max_dt,
                MAX_FRAME_DT
            );
        }
        if self.rocket_lifespan <= 0.0 || self.particle_lifespan <= 0.0 {
            bail!(
                "lifespans must be positive (rocket={}, particle={})",
                self.rocket_lifespan,
                self.particle_lifespan
            );
        }
        if self.particle_count == 0 {
            bail!("particle_count must be at least 1");
        }
        if self.launch_min_speed > self.launch_max_speed {
            bail!(
                "launch speed range is inverted: {} > {}",
                self.launch_min_speed,
                self.launch_max_speed
            );
        }
        if self.target_height_min > self.target_height_max {
            bail!(
                "target height range is inverted: {} > {}",
                self.target_height_min,
                self.target_height_max
            );
        }
        if !(0.0..1.0).contains(&self.particle_lifespan_jitter) {
            bail!(
                "particle_lifespan_jitter must be in [0, 1), got {}",
                self.particle_lifespan_jitter
            );
        }
        if self.gravity_y > 0.0 {
            bail!("gravity_y must point downward, got {}", self.gravity_y);
        }
        Ok(())
    }

    /// Ramène un delta de frame dans `[min_dt, max_dt]`.
    ///
    /// Un delta NaN ou négatif devient `min_dt`, un trou de frame trop long
    /// est borné par `max_dt` pour limiter l'erreur d'intégration.
    #[inline]
    pub fn sanitize_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() || dt <= 0.0 {
            self.min_dt
        } else {
            dt.clamp(self.min_dt, self.max_dt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PhysicConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sanitize_dt() {
        let cfg = PhysicConfig::default();
        assert_eq!(cfg.sanitize_dt(0.016), 0.016);
        assert_eq!(cfg.sanitize_dt(1.0), cfg.max_dt);
        assert_eq!(cfg.sanitize_dt(f32::INFINITY), cfg.max_dt);
        assert_eq!(cfg.sanitize_dt(0.0), cfg.min_dt);
        assert_eq!(cfg.sanitize_dt(-0.5), cfg.min_dt);
        assert_eq!(cfg.sanitize_dt(f32::NAN), cfg.min_dt);
        assert_eq!(cfg.sanitize_dt(f32::NEG_INFINITY), cfg.min_dt);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = PhysicConfig {
            particle_count: 0,
            ..PhysicConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = PhysicConfig {
            gravity_y: 9.8,
            ..PhysicConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = PhysicConfig {
            target_height_min: 200.0,
            ..PhysicConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = PhysicConfig {
            min_dt: 0.1,
            max_dt: 0.05,
            ..PhysicConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        for (lifespan, speed) in [(f32::NAN, 55.0), (3.0, f32::NAN), (f32::INFINITY, 55.0)] {
            let bad = PhysicConfig {
                rocket_lifespan: lifespan,
                launch_min_speed: speed,
                ..PhysicConfig::default()
            };
            assert!(bad.validate().is_err(), "{lifespan} / {speed} accepted");
        }

        let bad = PhysicConfig {
            auto_launch_spread: f32::NEG_INFINITY,
            ..PhysicConfig::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("auto_launch_spread"), "{err}");
    }

    #[test]
    fn test_max_dt_is_capped() {
        let bad = PhysicConfig {
            max_dt: 10.0,
            ..PhysicConfig::default()
        };
        assert!(bad.validate().is_err());

        let smaller = PhysicConfig {
            max_dt: 0.02,
            ..PhysicConfig::default()
        };
        assert!(smaller.validate().is_ok());
        assert_eq!(smaller.sanitize_dt(1.0), 0.02);
    }
}
