#[cfg(debug_assertions)]
use log::debug;
use generational_arena::{Arena, Index};

use crate::physic_engine::entity::{Entity, EntityId};

/// Collection ordonnée (ordre d'insertion) des entités actives.
///
/// # Rôle
/// Les entités vivent dans une `Arena` générationnelle ; `order` conserve
/// l'ordre d'insertion pour l'itération. La suppression se fait en deux
/// temps : on marque pendant la passe de mise à jour, on balaye ensuite
/// (`sweep`). La collection n'est jamais modifiée pendant qu'on l'itère.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Arena<Entity>,
    order: Vec<Index>,
    marked: Vec<Index>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Arena::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            marked: Vec::new(),
        }
    }

    /// Ajoute une entité en fin d'ordre d'itération.
    pub fn add(&mut self, entity: impl Into<Entity>) -> EntityId {
        let idx = self.entities.insert(entity.into());
        self.order.push(idx);
        EntityId(idx)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Itère sur les entités actives dans l'ordre d'insertion.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.order
            .iter()
            .filter_map(move |&idx| self.entities.get(idx).map(|e| (EntityId(idx), e)))
    }

    /// Visite mutable de toutes les entités, dans l'ordre d'insertion.
    ///
    /// Le store ne peut pas être modifié depuis `f` : on collecte les
    /// entités à supprimer/créer puis on les applique après la passe.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(EntityId, &mut Entity)) {
        let Self {
            entities, order, ..
        } = self;
        for &idx in order.iter() {
            if let Some(entity) = entities.get_mut(idx) {
                f(EntityId(idx), entity);
            }
        }
    }

    /// Marque une entité pour suppression au prochain `sweep`.
    ///
    /// Idempotent : marquer deux fois (ou marquer un id déjà supprimé)
    /// n'a aucun effet supplémentaire.
    pub fn mark_for_removal(&mut self, id: EntityId) {
        if self.entities.contains(id.0) && !self.marked.contains(&id.0) {
            self.marked.push(id.0);
        }
    }

    #[inline]
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Retire toutes les entités marquées et les rend à l'appelant.
    ///
    /// Chaque entité est rendue au plus une fois ; l'ordre relatif des
    /// survivantes est conservé.
    pub fn sweep(&mut self) -> Vec<(EntityId, Entity)> {
        if self.marked.is_empty() {
            return Vec::new();
        }

        let removed: Vec<(EntityId, Entity)> = self
            .marked
            .drain(..)
            .filter_map(|idx| self.entities.remove(idx).map(|e| (EntityId(idx), e)))
            .collect();

        let entities = &self.entities;
        self.order.retain(|&idx| entities.contains(idx));

        #[cfg(debug_assertions)]
        debug!(
            "Swept {} entities, {} still active",
            removed.len(),
            self.order.len()
        );

        removed
    }

    /// Vide le store (marques comprises).
    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
        self.marked.clear();
    }
}
