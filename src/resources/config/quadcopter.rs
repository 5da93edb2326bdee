use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{ensure_non_negative, ensure_positive};
use crate::utils::ConfigError;

/// Tuning for the quadcopter flight model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadcopterConfig {
    /// Thrust of one motor at full throttle, also the scale of the mixing
    /// and stability terms [N]
    pub motor_power: f64,
    /// Upper clamp for a single motor after mixing [N]
    pub max_motor_power: f64,
    /// Rate at which the spun-up throttle follows the commanded throttle [1/s]
    pub motor_response_speed: f64,
    /// Linear velocity damping coefficient [1/s]
    pub drag: f64,
    /// Angular velocity damping coefficient [1/s]
    pub angular_drag: f64,
    /// Gain of the self-levelling torque
    pub stability: f64,
    /// Gain applied to the pitch axis command
    pub pitch_speed: f64,
    /// Gain applied to the roll axis command
    pub roll_speed: f64,
    /// Gain applied to the yaw axis command
    pub yaw_speed: f64,
    /// Rate of change of the commanded throttle while held [1/s]
    pub throttle_speed: f64,
    /// Airframe mass [kg]
    pub mass: f64,
    /// Full extents of the airframe used for the inertia tensor [m]
    pub frame_extents: Vector3<f64>,
    /// Distance from the centre to each motor along the forward and right axes [m]
    pub motor_arm: f64,
}

impl Default for QuadcopterConfig {
    fn default() -> Self {
        Self {
            motor_power: 1000.0,
            max_motor_power: 2000.0,
            motor_response_speed: 5.0,
            drag: 5.0,
            angular_drag: 5.0,
            stability: 0.5,
            pitch_speed: 2.0,
            roll_speed: 2.0,
            yaw_speed: 2.0,
            throttle_speed: 10.0,
            mass: 1.0,
            frame_extents: Vector3::new(2.0, 0.2, 2.0),
            motor_arm: 0.5,
        }
    }
}

impl QuadcopterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("motor_power", self.motor_power)?;
        ensure_non_negative("max_motor_power", self.max_motor_power)?;
        ensure_non_negative("motor_response_speed", self.motor_response_speed)?;
        ensure_non_negative("drag", self.drag)?;
        ensure_non_negative("angular_drag", self.angular_drag)?;
        ensure_non_negative("stability", self.stability)?;
        ensure_non_negative("pitch_speed", self.pitch_speed)?;
        ensure_non_negative("roll_speed", self.roll_speed)?;
        ensure_non_negative("yaw_speed", self.yaw_speed)?;
        ensure_non_negative("throttle_speed", self.throttle_speed)?;
        ensure_positive("mass", self.mass)?;
        ensure_non_negative("motor_arm", self.motor_arm)?;
        if !self.frame_extents.iter().all(|e| e.is_finite() && *e > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "frame_extents must be positive, got {:?}",
                self.frame_extents
            )));
        }
        Ok(())
    }

    /// Copy with every scalar forced into its valid range. Used by
    /// constructors that must not fail.
    pub fn sanitized(&self) -> Self {
        let non_negative = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let defaults = Self::default();
        let extents = if self.frame_extents.iter().all(|e| e.is_finite() && *e > 0.0) {
            self.frame_extents
        } else {
            defaults.frame_extents
        };
        Self {
            motor_power: non_negative(self.motor_power),
            max_motor_power: non_negative(self.max_motor_power),
            motor_response_speed: non_negative(self.motor_response_speed),
            drag: non_negative(self.drag),
            angular_drag: non_negative(self.angular_drag),
            stability: non_negative(self.stability),
            pitch_speed: non_negative(self.pitch_speed),
            roll_speed: non_negative(self.roll_speed),
            yaw_speed: non_negative(self.yaw_speed),
            throttle_speed: non_negative(self.throttle_speed),
            mass: if self.mass.is_finite() && self.mass > 0.0 {
                self.mass
            } else {
                defaults.mass
            },
            frame_extents: extents,
            motor_arm: non_negative(self.motor_arm),
        }
    }
}
