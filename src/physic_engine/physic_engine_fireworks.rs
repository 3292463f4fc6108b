use glam::Vec3;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::{
    config::PhysicConfig,
    entity::{Entity, EntityId},
    entity_store::EntityStore,
    explosion::{Explosion, ExplosionState},
    launcher::AutoLauncher,
    rocket::{Rocket, RocketState},
    types::{Burst, UpdateResult},
    PhysicEngine,
};

#[derive(Debug)]
pub struct PhysicEngineFireworks {
    store: EntityStore,
    // Fusées ajoutées depuis le dernier update
    pending_launches: Vec<EntityId>,
    launcher: AutoLauncher,
    rng: StdRng,
    config: PhysicConfig,
    elapsed: f64,
}

impl PhysicEngineFireworks {
    pub fn new(config: &PhysicConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Moteur déterministe (tests, replays).
    pub fn with_seed(config: &PhysicConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Une config qui ne passe pas `validate()` est remplacée par les valeurs par défaut.
    fn with_rng(config: &PhysicConfig, mut rng: StdRng) -> Self {
        let config = match config.validate() {
            Ok(()) => config.clone(),
            Err(e) => {
                warn!("⚠️ Physic config rejected, using defaults: {e}");
                PhysicConfig::default()
            }
        };
        let launcher = AutoLauncher::new(&config, &mut rng);
        Self {
            store: EntityStore::with_capacity(64),
            pending_launches: Vec::new(),
            launcher,
            rng,
            config,
            elapsed: 0.0,
        }
    }

    /// Temps simulé cumulé (somme des pas bornés)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Une frame : lancement auto, passe de mise à jour, explosions, balayage.
    fn step(&mut self, dt: f32) -> UpdateResult {
        let dt = self.config.sanitize_dt(dt);
        self.elapsed += f64::from(dt);

        if let Some(point) = self.launcher.tick(dt, &self.config, &mut self.rng) {
            self.launch(point);
        }
        let launched = std::mem::take(&mut self.pending_launches);

        // Passe de mise à jour : on ne touche pas au store pendant l'itération,
        // on collecte les explosions à créer et les entités à supprimer.
        let cfg = &self.config;
        let mut burst_requests: Vec<(EntityId, Vec3)> = Vec::new();
        let mut expired: Vec<EntityId> = Vec::new();
        self.store.for_each_mut(|id, entity| match entity {
            Entity::Rocket(rocket) => {
                if let RocketState::Burst(center) = rocket.update(dt, cfg) {
                    burst_requests.push((id, center));
                }
            }
            Entity::Explosion(explosion) => {
                if explosion.update(dt, cfg.gravity_y) == ExplosionState::Expired {
                    expired.push(id);
                }
            }
        });

        let mut bursts = Vec::with_capacity(burst_requests.len());
        for (rocket, center) in burst_requests {
            let explosion = Explosion::new(center, &self.config, &mut self.rng);
            let explosion = self.store.add(explosion);
            self.store.mark_for_removal(rocket);
            debug!(
                "💥 Rocket {} burst at ({:.1}, {:.1}, {:.1}) -> explosion {}",
                rocket, center.x, center.y, center.z, explosion
            );
            bursts.push(Burst {
                rocket,
                explosion,
                center,
            });
        }
        for id in expired {
            self.store.mark_for_removal(id);
        }

        let removed = self
            .store
            .sweep()
            .into_iter()
            .map(|(id, _entity)| id)
            .collect();

        UpdateResult {
            dt,
            launched,
            bursts,
            removed,
        }
    }

    fn count_kind(&self, want_rocket: bool) -> usize {
        self.store
            .iter()
            .filter(|(_, e)| matches!(e, Entity::Rocket(_)) == want_rocket)
            .count()
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl PhysicEngine for PhysicEngineFireworks {
    fn launch(&mut self, ground_point: Vec3) -> EntityId {
        let rocket = Rocket::launch(ground_point, &self.config, &mut self.rng);
        self.spawn_rocket(rocket)
    }

    fn spawn_rocket(&mut self, rocket: Rocket) -> EntityId {
        let id = self.store.add(rocket);
        self.pending_launches.push(id);
        id
    }

    fn update(&mut self, dt: f32) -> UpdateResult {
        self.step(dt)
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(id)
    }

    fn iter_entities<'a>(&'a self) -> Box<dyn Iterator<Item = (EntityId, &'a Entity)> + 'a> {
        Box::new(self.store.iter())
    }

    fn rockets_count(&self) -> usize {
        self.count_kind(true)
    }

    fn explosions_count(&self) -> usize {
        self.count_kind(false)
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        if let Err(e) = config.validate() {
            warn!("⚠️ Physic config rejected: {e}");
            return false;
        }
        if config.particle_count != self.config.particle_count {
            info!(
                "particle_count changed: {} -> {} (applies to new explosions only)",
                self.config.particle_count, config.particle_count
            );
        }
        self.config = config.clone();
        self.launcher.reset(&self.config, &mut self.rng);
        true
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.store.clear();
        self.pending_launches.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn force_next_launch(&mut self);
    fn entities_count(&self) -> usize;
    fn store_mut(&mut self) -> &mut EntityStore;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn force_next_launch(&mut self) {
        self.launcher.force_next_launch();
    }

    fn entities_count(&self) -> usize {
        self.store.len()
    }

    fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }
}
