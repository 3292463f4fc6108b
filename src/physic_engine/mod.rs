pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Burst, UpdateResult};

pub mod config;
pub use self::config::PhysicConfig;

pub mod entity;
pub use self::entity::{Entity, EntityId, EntityKind};

pub mod entity_store;
pub use self::entity_store::EntityStore;

pub mod particle;
pub use self::particle::Particle;

pub mod rocket;
pub use self::rocket::{Rocket, RocketState};

pub mod explosion;
pub use self::explosion::{Explosion, ExplosionState};

pub mod launcher;
pub use self::launcher::AutoLauncher;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
