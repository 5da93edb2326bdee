//! Quadcopter workbench assembly and arcade flight dynamics on bevy's ECS.
//!
//! The assembly side tracks which required parts sit in their slots and
//! gates the flight phase on completion. The flight side integrates a
//! rigid body driven by four mixed motor thrusts and a self-levelling torque.

pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::plugins::*;
    pub use crate::resources::*;
    pub use crate::utils::{AssemblyError, ConfigError, SimError};
}
