use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, DEFAULT_RESET_ALTITUDE};

/// Spawn pose and fall-out floor for the flight scene.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSupervisorConfig {
    pub spawn_position: Vector3<f64>,
    pub spawn_attitude: UnitQuaternion<f64>,
    /// Altitude below which the drone is returned to spawn [m]
    pub reset_altitude: f64,
}

impl Default for FlightSupervisorConfig {
    fn default() -> Self {
        Self {
            spawn_position: Vector3::new(0.0, 2.0, 0.0),
            spawn_attitude: UnitQuaternion::identity(),
            reset_altitude: DEFAULT_RESET_ALTITUDE,
        }
    }
}

impl FlightSupervisorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reset_altitude.is_finite() {
            return Err(ConfigError::invalid("reset_altitude", self.reset_altitude));
        }
        if !self.spawn_position.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "spawn_position must be finite, got {:?}",
                self.spawn_position
            )));
        }
        if self.spawn_position.y < self.reset_altitude {
            return Err(ConfigError::ValidationError(format!(
                "spawn altitude {} is below reset altitude {}",
                self.spawn_position.y, self.reset_altitude
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_below_floor_rejected() {
        let config = FlightSupervisorConfig {
            spawn_position: Vector3::new(0.0, -20.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(FlightSupervisorConfig::default().validate().is_ok());
    }
}
