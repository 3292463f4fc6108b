use glam::Vec3;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::entity::{Entity, EntityId};
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::UpdateResult;

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune du moteur de simulation, utilisée par le `Simulator`
/// et par le rendu sans connaître l'implémentation concrète.
///
/// L'itération renvoie un `Box<dyn Iterator>` : signatures simples et
/// stables, au prix d'une petite allocation par frame.
pub trait PhysicEngine {
    /// Lance une fusée depuis un point du sol (vitesse et hauteur cible aléatoires).
    fn launch(&mut self, ground_point: Vec3) -> EntityId;

    /// Ajoute une fusée déjà construite.
    fn spawn_rocket(&mut self, rocket: Rocket) -> EntityId;

    /// Met à jour la physique sur un intervalle `dt` (borné en interne).
    /// Retourne un `UpdateResult` contenant les événements de la frame.
    fn update(&mut self, dt: f32) -> UpdateResult;

    fn entity(&self, id: EntityId) -> Option<&Entity>;

    /// Itère sur les entités actives dans l'ordre d'insertion.
    fn iter_entities<'a>(&'a self) -> Box<dyn Iterator<Item = (EntityId, &'a Entity)> + 'a>;

    fn rockets_count(&self) -> usize;

    fn explosions_count(&self) -> usize;

    /// Applique une nouvelle configuration ; retourne `false` si elle est rejetée.
    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}
