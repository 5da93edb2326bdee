pub mod assembly;
pub mod flight;
pub mod physics;
pub mod quadcopter;
pub mod simulation;

pub use assembly::AssemblyConfig;
pub use flight::FlightSupervisorConfig;
pub use physics::PhysicsConfig;
pub use quadcopter::QuadcopterConfig;
pub use simulation::SimulationConfig;

use crate::utils::ConfigError;

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}
