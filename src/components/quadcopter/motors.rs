use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{MOTOR_COUNT, PITCH_MIX_WEIGHT, ROLL_MIX_WEIGHT, YAW_MIX_WEIGHT};

/// Per-motor thrust for the current tick, indexed 1 = front-left,
/// 2 = front-right, 3 = rear-right, 4 = rear-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorState {
    pub powers: [f64; MOTOR_COUNT],
}

impl MotorState {
    /// Power of motor `index` (1-based). Out-of-range indices read as zero.
    pub fn motor(&self, index: usize) -> f64 {
        index
            .checked_sub(1)
            .and_then(|i| self.powers.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.powers.iter().sum()
    }
}

/// Attitude command after axis gains, in units of `motor_power`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisCommand {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Body-frame position of motor `index` (1-based) for an X layout with the
/// given arm. Body axes: +x right, +y up, +z forward.
pub fn motor_offset(index: usize, arm: f64) -> Vector3<f64> {
    match index {
        1 => Vector3::new(-arm, 0.0, arm),
        2 => Vector3::new(arm, 0.0, arm),
        3 => Vector3::new(arm, 0.0, -arm),
        4 => Vector3::new(-arm, 0.0, -arm),
        _ => Vector3::zeros(),
    }
}

/// Distribute throttle and the three attitude axes over the four motors.
///
/// Pitch is a front/rear differential, roll a left/right differential and yaw
/// a diagonal differential. Each result is clamped to `[0, max_motor_power]`.
pub fn mix(
    base_power: f64,
    command: &AxisCommand,
    motor_power: f64,
    max_motor_power: f64,
) -> MotorState {
    let pitch = command.pitch * motor_power * PITCH_MIX_WEIGHT;
    let roll = command.roll * motor_power * ROLL_MIX_WEIGHT;
    let yaw = command.yaw * motor_power * YAW_MIX_WEIGHT;

    let raw = [
        base_power + pitch + roll + yaw,
        base_power + pitch - roll - yaw,
        base_power - pitch - roll + yaw,
        base_power - pitch + roll - yaw,
    ];

    let upper = max_motor_power.max(0.0);
    MotorState {
        powers: raw.map(|p| if p.is_nan() { 0.0 } else { p.clamp(0.0, upper) }),
    }
}
