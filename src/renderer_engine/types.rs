use bytemuck::{Pod, Zeroable};

use crate::physic_engine::{EntityKind, Particle};

/// Structure envoyée au GPU représentant un point à dessiner.
///
/// | Champ      | Type       | Attribut GPU   |
/// |------------|------------|----------------|
/// | `position` | `[f32; 3]` | `location = 0` |
/// | `alpha`    | `f32`      | `location = 1` |
/// | `color`    | `[f32; 3]` | `location = 2` |
/// | `size`     | `f32`      | `location = 3` |
///
/// **Stride total** : `8 × f32 = 32 octets`, sans padding.
#[repr(C)] // garantit un layout C-compatible pour l’envoi GPU
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    /// Opacité (commune à tout le nuage pour une explosion)
    pub alpha: f32,
    pub color: [f32; 3],
    pub size: f32,
}

impl ParticleVertex {
    pub const ROCKET_SIZE: f32 = 3.0;
    pub const PARTICLE_SIZE: f32 = 1.5;

    pub fn from_particle(p: &Particle, opacity: f32) -> Self {
        Self {
            position: p.pos.to_array(),
            alpha: opacity,
            color: p.color.to_array(),
            size: Self::PARTICLE_SIZE,
        }
    }
}

/// Ressources de rendu d'une entité (équivalent d'un couple géométrie/matériau).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualHandle {
    pub handle: u64,
    pub kind: EntityKind,
    /// Nombre de points alloués dans la géométrie
    pub capacity: usize,
}
