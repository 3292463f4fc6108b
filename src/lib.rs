pub mod simulator;
pub use simulator::Simulator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{HeadlessRenderer, RendererEngine};
// Physic engine
pub mod physic_engine;
pub use physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};
// Input (picking)
pub mod input;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
