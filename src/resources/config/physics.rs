use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ensure_positive;
use crate::utils::{ConfigError, DEFAULT_TIMESTEP, GRAVITY, MAX_ANGULAR_VELOCITY, MAX_VELOCITY};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step [s]
    pub timestep: f64,
    /// Gravitational acceleration in the world frame [m/s²]
    pub gravity: Vector3<f64>,
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            max_velocity: MAX_VELOCITY,
            max_angular_velocity: MAX_ANGULAR_VELOCITY,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("timestep", self.timestep)?;
        ensure_positive("max_velocity", self.max_velocity)?;
        ensure_positive("max_angular_velocity", self.max_angular_velocity)?;
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        Ok(())
    }
}
