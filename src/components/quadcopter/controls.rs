use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::clamp_unit;

/// Discrete throttle stick state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrottleCommand {
    Decrease,
    #[default]
    Hold,
    Increase,
}

impl ThrottleCommand {
    pub fn delta(&self) -> f64 {
        match self {
            ThrottleCommand::Decrease => -1.0,
            ThrottleCommand::Hold => 0.0,
            ThrottleCommand::Increase => 1.0,
        }
    }
}

/// Pilot input sampled once per tick.
///
/// `throttle_delta` is a rate in [-1, 1], not an absolute setting. The three
/// attitude axes are in [-1, 1].
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub throttle_delta: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl ControlInput {
    pub fn new(throttle: ThrottleCommand, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            throttle_delta: throttle.delta(),
            pitch,
            roll,
            yaw,
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn throttle(command: ThrottleCommand) -> Self {
        Self {
            throttle_delta: command.delta(),
            ..Self::default()
        }
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_roll(mut self, roll: f64) -> Self {
        self.roll = roll;
        self
    }

    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = yaw;
        self
    }

    /// Copy with every axis forced into [-1, 1]; NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self {
            throttle_delta: clamp_unit(self.throttle_delta),
            pitch: clamp_unit(self.pitch),
            roll: clamp_unit(self.roll),
            yaw: clamp_unit(self.yaw),
        }
    }
}
