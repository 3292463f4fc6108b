use glam::Vec3;

use crate::physic_engine::entity::EntityId;

/// Explosion déclenchée pendant une frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    /// Fusée qui vient d'exploser (supprimée à la fin de la même frame)
    pub rocket: EntityId,
    /// Nuage de particules créé à sa place
    pub explosion: EntityId,
    pub center: Vec3,
}

// ------------------------
// UpdateResult
// ------------------------
/// Événements produits par une frame de simulation.
///
/// Le collaborateur de rendu s'en sert pour instancier (`launched`,
/// `bursts`) et détruire (`removed`) les visuels associés.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Pas de temps réellement appliqué (après bornage)
    pub dt: f32,
    /// Fusées ajoutées depuis la frame précédente
    pub launched: Vec<EntityId>,
    pub bursts: Vec<Burst>,
    /// Entités retirées du store, chacune une seule fois
    pub removed: Vec<EntityId>,
}

impl UpdateResult {
    pub fn is_empty(&self) -> bool {
        self.launched.is_empty() && self.bursts.is_empty() && self.removed.is_empty()
    }
}
