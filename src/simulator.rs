use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Vec3;
use log::{debug, info};

use crate::log_metrics;
use crate::physic_engine::{Entity, EntityId, PhysicConfig, PhysicEngine, UpdateResult};
use crate::profiler::Profiler;
use crate::renderer_engine::RendererEngine;

/// Pilote de frames : relie les lancements (clics), le moteur physique et
/// le collaborateur de rendu.
///
/// Les demandes de lancement passent par un canal : un thread d'entrée peut
/// les pousser sans jamais toucher au store, qui reste sur le thread de frame.
pub struct Simulator<R, P>
where
    R: RendererEngine,
    P: PhysicEngine,
{
    renderer_engine: R,
    physic_engine: P,

    launch_sender: Sender<Vec3>,
    launch_receiver: Receiver<Vec3>,

    profiler: Profiler,
    frames: u64,
    log_every_frames: u64,
}

impl<R, P> Simulator<R, P>
where
    R: RendererEngine,
    P: PhysicEngine,
{
    pub fn new(renderer_engine: R, physic_engine: P) -> Self {
        let (launch_sender, launch_receiver) = unbounded();
        Self {
            renderer_engine,
            physic_engine,
            launch_sender,
            launch_receiver,
            profiler: Profiler::new(200),
            frames: 0,
            log_every_frames: 300,
        }
    }

    /// Fréquence (en frames) des logs de métriques ; 0 désactive.
    pub fn with_log_every_frames(mut self, frames: u64) -> Self {
        self.log_every_frames = frames;
        self
    }

    /// Canal pour demander un lancement depuis n'importe quel thread.
    pub fn launch_sender(&self) -> Sender<Vec3> {
        self.launch_sender.clone()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic(&self) -> &P {
        &self.physic_engine
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        let applied = self.physic_engine.reload_config(config);
        if applied {
            info!("🔄 Physic config reloaded");
        }
        applied
    }

    /// Joue `frames` frames de `dt` secondes.
    pub fn run(&mut self, frames: u64, dt: f32) {
        for _ in 0..frames {
            self.step(dt);
        }
        info!(
            "🎆 Show finished after {} frames: {} rockets, {} explosions still active",
            self.frames,
            self.physic_engine.rockets_count(),
            self.physic_engine.explosions_count()
        );
    }

    /// Une frame complète : lancements en attente, physique, visuels, dessin.
    pub fn step(&mut self, dt: f32) -> UpdateResult {
        for point in self.launch_receiver.try_iter() {
            let id = self.physic_engine.launch(point);
            debug!("Launch request at {point:?} -> rocket {id}");
        }

        let update_result = self
            .profiler
            .profile_block("physic - update", || self.physic_engine.update(dt));

        Self::sync_visuals(
            &mut self.renderer_engine,
            &self.physic_engine,
            &update_result,
        );

        let points = self.profiler.profile_block("render frame", || {
            self.renderer_engine.draw_frame(&self.physic_engine)
        });

        self.profiler
            .record_metric("rockets", self.physic_engine.rockets_count());
        self.profiler
            .record_metric("explosions", self.physic_engine.explosions_count());
        self.profiler.record_metric("points drawn", points);

        self.frames += 1;
        if self.log_every_frames > 0 && self.frames % self.log_every_frames == 0 {
            info!("Frame {}", self.frames);
            log_metrics!(&self.profiler);
        }

        update_result
    }

    /// Crée les visuels des nouvelles entités et libère ceux des entités supprimées.
    fn sync_visuals(renderer: &mut R, physic: &P, update_result: &UpdateResult) {
        // Entités apparues puis supprimées dans la même frame : jamais instanciées
        let mut never_attached: Vec<EntityId> = Vec::new();

        for &id in &update_result.launched {
            match physic.entity(id) {
                Some(Entity::Rocket(rocket)) => renderer.attach_rocket(id, rocket),
                _ => never_attached.push(id),
            }
        }
        for burst in &update_result.bursts {
            match physic.entity(burst.explosion) {
                Some(Entity::Explosion(explosion)) => {
                    renderer.attach_explosion(burst.explosion, explosion)
                }
                _ => never_attached.push(burst.explosion),
            }
        }
        for id in &update_result.removed {
            if !never_attached.contains(id) && !renderer.release(*id) {
                debug!("Removed entity {id} had no visual to release");
            }
        }
    }

    pub fn close(&mut self) {
        self.physic_engine.close();
        self.renderer_engine.close();
        info!("Simulator closed after {} frames", self.frames);
    }
}
