#[cfg(debug_assertions)]
use log::debug;
use log::{info, warn};
use std::collections::HashMap;

use crate::physic_engine::{Entity, EntityId, EntityKind, Explosion, PhysicEngine, Rocket};
use crate::renderer_engine::types::{ParticleVertex, VisualHandle};
use crate::renderer_engine::RendererEngine;

/// Compteurs de ressources du renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub allocated: u64,
    pub released: u64,
    /// Libérations demandées pour un id sans visuel (ignorées)
    pub ignored_releases: u64,
    pub frames_drawn: u64,
    pub last_frame_points: usize,
}

impl RenderStats {
    #[inline]
    pub fn live_visuals(&self) -> u64 {
        self.allocated - self.released
    }
}

/// Renderer sans fenêtre : gère le cycle de vie des visuels et remplit un
/// buffer de sommets comme le ferait un VBO, sans contexte graphique.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    visuals: HashMap<EntityId, VisualHandle>,
    next_handle: u64,
    vertices: Vec<ParticleVertex>,
    stats: RenderStats,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn visual(&self, id: EntityId) -> Option<&VisualHandle> {
        self.visuals.get(&id)
    }

    pub fn visuals_count(&self) -> usize {
        self.visuals.len()
    }

    /// Sommets de la dernière frame
    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    /// Vue brute du buffer, telle qu'elle serait envoyée au GPU
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn allocate(&mut self, id: EntityId, kind: EntityKind, capacity: usize) {
        let handle = VisualHandle {
            handle: self.next_handle,
            kind,
            capacity,
        };
        self.next_handle += 1;

        if let Some(previous) = self.visuals.insert(id, handle) {
            // Un id générationnel n'est jamais réutilisé : ne devrait pas arriver
            warn!("Entity {id} already had visual {previous:?}, replacing it");
            self.stats.released += 1;
        }
        self.stats.allocated += 1;

        #[cfg(debug_assertions)]
        debug!(
            "Visual {} allocated for {} {} ({} points)",
            handle.handle,
            kind.description(),
            id,
            capacity
        );
    }
}

impl RendererEngine for HeadlessRenderer {
    fn attach_rocket(&mut self, id: EntityId, _rocket: &Rocket) {
        self.allocate(id, EntityKind::Rocket, 1);
    }

    fn attach_explosion(&mut self, id: EntityId, explosion: &Explosion) {
        self.allocate(id, EntityKind::Explosion, explosion.particle_count());
    }

    fn release(&mut self, id: EntityId) -> bool {
        match self.visuals.remove(&id) {
            Some(_handle) => {
                self.stats.released += 1;
                true
            }
            None => {
                warn!("Release requested for {id} without visual, ignored");
                self.stats.ignored_releases += 1;
                false
            }
        }
    }

    fn draw_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize {
        self.vertices.clear();

        for (id, entity) in physic.iter_entities() {
            if !self.visuals.contains_key(&id) {
                // Entité pas encore instanciée côté rendu
                continue;
            }
            match entity {
                Entity::Rocket(rocket) => self.vertices.push(ParticleVertex {
                    position: rocket.pos.to_array(),
                    alpha: 1.0,
                    color: [1.0, 0.9, 0.6],
                    size: ParticleVertex::ROCKET_SIZE,
                }),
                Entity::Explosion(explosion) => {
                    let opacity = explosion.opacity();
                    self.vertices.extend(
                        explosion
                            .alive_particles()
                            .map(|p| ParticleVertex::from_particle(p, opacity)),
                    );
                }
            }
        }

        self.stats.frames_drawn += 1;
        self.stats.last_frame_points = self.vertices.len();
        self.vertices.len()
    }

    fn close(&mut self) {
        let leaked = self.visuals.len();
        if leaked > 0 {
            info!("Releasing {leaked} remaining visuals on close");
        }
        self.stats.released += leaked as u64;
        self.visuals.clear();
        self.vertices.clear();
    }
}
