use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use log::{info, warn};
use std::env;

use fireworks_show3d::input::{pick_ground_point, Camera};
use fireworks_show3d::physic_engine::{PhysicConfig, PhysicEngineFireworks};
use fireworks_show3d::utils::show_rust_core_dependencies;
use fireworks_show3d::{HeadlessRenderer, Simulator};

const DEFAULT_CONFIG_PATH: &str = "assets/config/physic.toml";
const FRAME_DT: f32 = 1.0 / 60.0;

/// Lance un spectacle sans fenêtre : `fireworks_show3d [secondes]`.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks Show...");

    show_rust_core_dependencies();

    // --------------------------
    // Configuration
    // --------------------------
    let config_path =
        env::var("FIREWORKS_PHYSIC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let physic_config = match PhysicConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default physic config ({config_path}: {e:#})");
            PhysicConfig::default()
        }
    };
    info!("Physic config loaded:\n{:#?}", physic_config);

    let seconds: f32 = env::args()
        .nth(1) // durée du spectacle en argument CLI
        .map(|s| s.parse().with_context(|| format!("invalid duration: {s}")))
        .transpose()?
        .unwrap_or(20.0);
    let frames = (seconds / FRAME_DT).ceil().max(0.0) as u64;

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    let viewport = Vec2::new(1024.0, 800.0);
    let camera = Camera::look_at(
        Vec3::new(0.0, 40.0, 220.0),
        Vec3::new(0.0, 60.0, 0.0),
        60f32.to_radians(),
        viewport.x / viewport.y,
    );
    let ground_height = physic_config.ground_height;

    let physic_engine = PhysicEngineFireworks::new(&physic_config);
    let renderer_engine = HeadlessRenderer::new();
    let mut simulator = Simulator::new(renderer_engine, physic_engine);

    // Quelques "clics" scriptés, envoyés depuis un autre thread comme le ferait
    // une boucle d'événements fenêtre.
    let launch_sender = simulator.launch_sender();
    let input_thread = std::thread::spawn(move || {
        let clicks = [(200.0, 700.0), (512.0, 760.0), (824.0, 700.0)];
        for (x, y) in clicks {
            match pick_ground_point(&camera, Vec2::new(x, y), viewport, ground_height) {
                Some(point) => {
                    if launch_sender.send(point).is_err() {
                        break;
                    }
                }
                None => warn!("Click ({x}, {y}) does not hit the ground"),
            }
        }
    });
    if input_thread.join().is_err() {
        warn!("Input thread panicked");
    }

    simulator.run(frames, FRAME_DT);

    let stats = simulator.renderer().stats();
    info!(
        "Visuals: {} allocated, {} released, {} live",
        stats.allocated,
        stats.released,
        stats.live_visuals()
    );
    simulator.close();

    Ok(())
}
