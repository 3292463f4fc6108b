//! Conversion d'un clic écran en point de lancement sur le plan du sol.
//!
//! Chaîne : pixels → NDC → rayon monde (dé-projection par l'inverse de
//! view-projection) → intersection avec le plan horizontal `y = ground_height`.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Rayon en espace monde (direction normalisée)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection avec le plan `y = ground_height`.
    ///
    /// `None` si le rayon est parallèle au plan ou si le plan est derrière l'origine.
    pub fn intersect_ground(&self, ground_height: f32) -> Option<Vec3> {
        const EPSILON: f32 = 1e-6;
        if self.direction.y.abs() < EPSILON {
            return None;
        }
        let t = (ground_height - self.origin.y) / self.direction.y;
        if t < 0.0 {
            return None;
        }
        let mut hit = self.at(t);
        // Évite un y à 1e-7 près du plan
        hit.y = ground_height;
        Some(hit)
    }
}

/// Caméra perspective minimale (matrices glam, convention OpenGL : z NDC dans [-1, 1])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// Caméra qui regarde `target` depuis `eye`.
    pub fn look_at(eye: Vec3, target: Vec3, fov_y_radians: f32, aspect: f32) -> Self {
        Self {
            view: Mat4::look_at_rh(eye, target, Vec3::Y),
            projection: Mat4::perspective_rh_gl(fov_y_radians, aspect, 0.1, 2000.0),
        }
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Pixels (origine en haut à gauche) → NDC dans [-1, 1], y vers le haut.
    pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / viewport.x) * 2.0 - 1.0,
            1.0 - (screen.y / viewport.y) * 2.0,
        )
    }

    /// Rayon monde passant par un point NDC, du plan near vers le plan far.
    pub fn ndc_to_world_ray(&self, ndc: Vec2) -> Option<Ray> {
        let inv = self.view_projection().inverse();
        if !inv.is_finite() {
            return None;
        }

        let near = inv * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if near.w.abs() < f32::EPSILON || far.w.abs() < f32::EPSILON {
            return None;
        }
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        Some(Ray::new(near, far - near))
    }

    pub fn screen_to_world_ray(&self, screen: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        self.ndc_to_world_ray(Self::screen_to_ndc(screen, viewport))
    }
}

/// Point du sol sous le curseur, s'il existe.
pub fn pick_ground_point(
    camera: &Camera,
    screen: Vec2,
    viewport: Vec2,
    ground_height: f32,
) -> Option<Vec3> {
    camera
        .screen_to_world_ray(screen, viewport)?
        .intersect_ground(ground_height)
}
