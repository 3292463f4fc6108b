use crate::physic_engine::{EntityId, Explosion, PhysicEngine, Rocket};

/// Collaborateur de rendu.
///
/// Chaque entité simulée possède au plus un visuel (géométrie + matériau),
/// créé à son apparition et libéré exactement une fois à sa suppression.
pub trait RendererEngine {
    /// Crée le visuel d'une fusée qui vient d'être lancée.
    fn attach_rocket(&mut self, id: EntityId, rocket: &Rocket);

    /// Crée le visuel (buffer de `particle_count` points) d'une explosion.
    fn attach_explosion(&mut self, id: EntityId, explosion: &Explosion);

    /// Détache le visuel de la scène et libère ses ressources.
    ///
    /// Retourne `false` si aucun visuel n'était associé à `id` (rien n'est libéré).
    fn release(&mut self, id: EntityId) -> bool;

    /// Dessine l'état courant ; retourne le nombre de points dessinés.
    fn draw_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize;

    fn close(&mut self);
}
