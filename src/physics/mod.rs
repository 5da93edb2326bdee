//! Rigid-body helpers shared by the flight model and its systems.

mod forces;
mod integrator;

pub use forces::accumulate_forces;
pub use integrator::{apply_damping, apply_velocity_limits, integrate_state};
