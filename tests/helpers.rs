use fireworks_show3d::physic_engine::{EntityId, Explosion, PhysicConfig, PhysicEngine, Rocket};
use fireworks_show3d::RendererEngine;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

#[allow(dead_code)]
pub const DT: f32 = 0.016;

/// Configuration déterministe (pas de lancement auto)
#[allow(dead_code)]
pub fn test_config() -> PhysicConfig {
    PhysicConfig {
        auto_launch: false,
        ..PhysicConfig::default()
    }
}

/// Fusée verticale partant de l'origine
#[allow(dead_code)]
pub fn vertical_rocket(vy: f32, target_height: f32) -> Rocket {
    Rocket::new(Vec3::ZERO, Vec3::new(0.0, vy, 0.0), target_height)
}

/// Renderer qui journalise ses appels
#[allow(dead_code)]
pub struct TestRenderer {
    pub log: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl TestRenderer {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { log }
    }
}

impl RendererEngine for TestRenderer {
    fn attach_rocket(&mut self, id: EntityId, _rocket: &Rocket) {
        self.log.borrow_mut().push(format!("attach_rocket {id}"));
    }

    fn attach_explosion(&mut self, id: EntityId, explosion: &Explosion) {
        self.log.borrow_mut().push(format!(
            "attach_explosion {id} {}",
            explosion.particle_count()
        ));
    }

    fn release(&mut self, id: EntityId) -> bool {
        self.log.borrow_mut().push(format!("release {id}"));
        true
    }

    fn draw_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize {
        self.log.borrow_mut().push("draw_frame".into());
        physic.iter_entities().count()
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("close".into());
    }
}
