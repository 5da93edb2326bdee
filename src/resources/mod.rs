mod assembly;
pub mod config;

pub use assembly::{AssemblyProgress, AssemblyTracker};
pub use config::{
    AssemblyConfig, FlightSupervisorConfig, PhysicsConfig, QuadcopterConfig, SimulationConfig,
};
