use generational_arena::Index;
use std::fmt;

use crate::physic_engine::{explosion::Explosion, rocket::Rocket};

/// Identifiant stable d'une entité du store.
///
/// Basé sur un index générationnel : un identifiant périmé ne désigne jamais
/// une entité créée plus tard dans le même slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) Index);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{slot}v{generation}")
    }
}

/// Types d'entités simulées
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Fusée en phase ascendante
    Rocket = 0,
    /// Nuage de particules après l'explosion
    Explosion = 1,
}

impl EntityKind {
    /// Retourne une description lisible du type d'entité
    pub fn description(&self) -> &'static str {
        match self {
            EntityKind::Rocket => "Ascending rocket",
            EntityKind::Explosion => "Explosion particle cloud",
        }
    }
}

/// Une entité active de la simulation
#[derive(Debug, Clone)]
pub enum Entity {
    Rocket(Rocket),
    Explosion(Explosion),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Rocket(_) => EntityKind::Rocket,
            Entity::Explosion(_) => EntityKind::Explosion,
        }
    }

    pub fn as_rocket(&self) -> Option<&Rocket> {
        match self {
            Entity::Rocket(r) => Some(r),
            Entity::Explosion(_) => None,
        }
    }

    pub fn as_explosion(&self) -> Option<&Explosion> {
        match self {
            Entity::Explosion(e) => Some(e),
            Entity::Rocket(_) => None,
        }
    }
}

impl From<Rocket> for Entity {
    fn from(rocket: Rocket) -> Self {
        Entity::Rocket(rocket)
    }
}

impl From<Explosion> for Entity {
    fn from(explosion: Explosion) -> Self {
        Entity::Explosion(explosion)
    }
}
