use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::model::FlightDynamicsModel;
use crate::components::Pose;
use crate::resources::FlightSupervisorConfig;

/// Returns the drone to its spawn pose when it falls below the altitude
/// floor or when the player asks for a reset.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSupervisor {
    pub spawn: Pose,
    pub reset_altitude: f64,
}

impl Default for FlightSupervisor {
    fn default() -> Self {
        Self::from_config(&FlightSupervisorConfig::default())
    }
}

impl FlightSupervisor {
    pub fn from_config(config: &FlightSupervisorConfig) -> Self {
        Self {
            spawn: Pose::new(config.spawn_position, config.spawn_attitude),
            reset_altitude: config.reset_altitude,
        }
    }

    /// Reset `model` if it has dropped below the floor.
    pub fn check(&self, model: &mut FlightDynamicsModel) -> bool {
        let altitude = model.body().altitude();
        if altitude < self.reset_altitude {
            info!(
                "Altitude {:.1} m below floor {:.1} m, resetting",
                altitude, self.reset_altitude
            );
            self.reset(model);
            true
        } else {
            false
        }
    }

    pub fn reset(&self, model: &mut FlightDynamicsModel) {
        model.reset_to(self.spawn.position, self.spawn.orientation);
    }
}
