use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::model::StepOutput;
use crate::utils::{SimError, MOTOR_COUNT};

/// Flight readouts for an external HUD.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Spun-up throttle as a percentage
    pub throttle_percent: f64,
    /// Height above the world origin [m]
    pub altitude: f64,
    /// Ground-frame speed [m/s]
    pub speed: f64,
    pub motor_powers: [f64; MOTOR_COUNT],
}

impl Telemetry {
    pub fn from_output(output: &StepOutput) -> Self {
        Self {
            throttle_percent: output.current_throttle * 100.0,
            altitude: output.body.altitude(),
            speed: output.body.speed(),
            motor_powers: output.motors.powers,
        }
    }

    /// Write this readout as one line of JSON.
    pub fn write_json_line<W: Write>(&self, out: &mut W) -> Result<(), SimError> {
        let line = serde_json::to_string(self)?;
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
