mod assembly;
mod events;
mod flight;

pub use assembly::{AssemblyPlugin, AssemblySet};
pub use events::{
    AssemblyResetRequested, DroneReset, DroneResetRequested, FlightRejected, FlightUnlocked,
    PartDropped, PartRemovalRequested, ResetReason, StartFlightRequested,
};
pub use flight::{FlightPlugin, FlightSet};

use bevy::prelude::*;

use crate::resources::SimulationConfig;

/// Assembly and flight together, configured from one `SimulationConfig`.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        app.add_plugins((
            AssemblyPlugin::with_config(config.assembly.clone()),
            FlightPlugin::with_config(
                config.quadcopter.clone(),
                config.physics.clone(),
                config.flight.clone(),
            ),
        ));
    }
}
