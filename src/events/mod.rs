pub mod controls;
pub mod pointer;

pub use controls::{wire_controls, ControlsWiring};
pub use pointer::{wire_orbit_controls, OrbitWiring};
