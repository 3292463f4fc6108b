pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod types;
pub use self::types::{ParticleVertex, VisualHandle};

pub mod headless;
pub use self::headless::{HeadlessRenderer, RenderStats};
