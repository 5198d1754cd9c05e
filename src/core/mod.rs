pub mod error;
pub mod rotation;
pub mod transport;

// Shader bundled as a string constant
pub static TURNTABLE_WGSL: &str = include_str!("../../shaders/turntable.wgsl");

pub use error::PlayerError;
pub use rotation::Turntable;
pub use transport::{LoadToken, Phase, Transport};
