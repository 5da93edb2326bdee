use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::controls::ControlInput;
use super::motors::{mix, motor_offset, AxisCommand, MotorState};
use super::telemetry::Telemetry;
use crate::components::{Force, Moment, PhysicsComponent, Pose, ReferenceFrame, RigidBodyState};
use crate::physics::{accumulate_forces, apply_damping, apply_velocity_limits, integrate_state};
use crate::resources::{PhysicsConfig, QuadcopterConfig};
use crate::utils::{
    clamp01, lerp, rotate_about, sanitize_dt, wrap_degrees, MOTOR_COUNT, PROPELLER_SPIN_RATE,
};

/// Whether forces are being applied to the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Body inactive: throttle and motors update, the body does not move
    #[default]
    Grounded,
    /// Forces applied every tick
    Airborne,
}

/// Result of one `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutput {
    pub body: RigidBodyState,
    pub motors: MotorState,
    pub current_throttle: f64,
}

/// Quadcopter flight model: throttle smoothing, motor mixing, force
/// application at the motor positions, and a self-levelling torque.
#[derive(Component, Debug, Clone)]
pub struct FlightDynamicsModel {
    config: QuadcopterConfig,
    physics_config: PhysicsConfig,
    physics: PhysicsComponent,
    body: RigidBodyState,
    phase: FlightPhase,
    target_throttle: f64,
    current_throttle: f64,
    motors: MotorState,
    propeller_angles: [f64; MOTOR_COUNT],
}

impl Default for FlightDynamicsModel {
    fn default() -> Self {
        Self::new(
            QuadcopterConfig::default(),
            PhysicsConfig::default(),
            Pose::default(),
        )
    }
}

impl FlightDynamicsModel {
    /// Build a grounded model resting at `spawn`. Out-of-range configuration
    /// values are clamped rather than rejected.
    pub fn new(config: QuadcopterConfig, physics_config: PhysicsConfig, spawn: Pose) -> Self {
        let config = config.sanitized();
        let physics = PhysicsComponent::solid_box(config.mass, config.frame_extents);
        Self {
            config,
            physics_config,
            physics,
            body: RigidBodyState::at_pose(spawn.position, spawn.orientation),
            phase: FlightPhase::Grounded,
            target_throttle: 0.0,
            current_throttle: 0.0,
            motors: MotorState::default(),
            propeller_angles: [0.0; MOTOR_COUNT],
        }
    }

    /// Attach the model to an active body. Idempotent.
    pub fn activate(&mut self) {
        if self.phase == FlightPhase::Grounded {
            info!("Quadcopter airborne at {:?}", self.body.position);
            self.phase = FlightPhase::Airborne;
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }

    pub fn config(&self) -> &QuadcopterConfig {
        &self.config
    }

    pub fn body(&self) -> &RigidBodyState {
        &self.body
    }

    pub fn motors(&self) -> &MotorState {
        &self.motors
    }

    pub fn current_throttle(&self) -> f64 {
        self.current_throttle
    }

    pub fn target_throttle(&self) -> f64 {
        self.target_throttle
    }

    /// Cosmetic propeller angles in degrees, [0, 360).
    pub fn propeller_angles(&self) -> &[f64; MOTOR_COUNT] {
        &self.propeller_angles
    }

    /// Net force and moment applied during the last airborne tick.
    pub fn last_net_force(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.physics.net_force, self.physics.net_moment)
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::from_output(&self.output())
    }

    /// Advance the model by `dt` seconds under `controls`.
    pub fn step(&mut self, dt: f64, controls: &ControlInput) -> StepOutput {
        let dt = sanitize_dt(dt);
        let controls = controls.clamped();

        self.update_throttle(dt, controls.throttle_delta);

        let base_power = self.current_throttle * self.config.motor_power;
        self.motors = mix(
            base_power,
            &self.axis_command(&controls),
            self.config.motor_power,
            self.config.max_motor_power,
        );

        self.spin_propellers(dt);

        if self.is_airborne() && dt > 0.0 {
            self.apply_forces();
            integrate_state(&self.physics, &mut self.body, dt);
            apply_damping(&mut self.body, self.config.drag, self.config.angular_drag, dt);
            apply_velocity_limits(
                &mut self.body,
                self.physics_config.max_velocity,
                self.physics_config.max_angular_velocity,
            );
        }

        self.output()
    }

    /// Teleport to a pose with zero linear and angular velocity. Throttle is
    /// left as it was.
    pub fn reset_to(&mut self, position: Vector3<f64>, orientation: UnitQuaternion<f64>) {
        self.body.teleport(position, orientation);
        self.physics.clear_forces();
    }

    fn output(&self) -> StepOutput {
        StepOutput {
            body: self.body.clone(),
            motors: self.motors,
            current_throttle: self.current_throttle,
        }
    }

    fn update_throttle(&mut self, dt: f64, throttle_delta: f64) {
        self.target_throttle =
            clamp01(self.target_throttle + throttle_delta * self.config.throttle_speed * dt);
        self.current_throttle = lerp(
            self.current_throttle,
            self.target_throttle,
            dt * self.config.motor_response_speed,
        );
    }

    fn axis_command(&self, controls: &ControlInput) -> AxisCommand {
        AxisCommand {
            pitch: controls.pitch * self.config.pitch_speed,
            roll: controls.roll * self.config.roll_speed,
            yaw: controls.yaw * self.config.yaw_speed,
        }
    }

    fn apply_forces(&mut self) {
        self.physics.clear_forces();

        for (i, power) in self.motors.powers.iter().enumerate() {
            self.physics.add_force(Force {
                vector: Vector3::new(0.0, *power, 0.0),
                point: Some(motor_offset(i + 1, self.config.motor_arm)),
                frame: ReferenceFrame::Body,
            });
        }

        self.physics.add_moment(Moment {
            vector: self.stability_torque(),
            frame: ReferenceFrame::Inertial,
        });

        accumulate_forces(&mut self.physics, &self.body, &self.physics_config.gravity);
    }

    /// Torque pulling the body's predicted up vector back towards world up.
    /// The prediction rotates the current up vector about the angular
    /// velocity; with no angular velocity there is no torque.
    ///
    /// This acts as an almost undamped levelling spring. A tilted body swings
    /// back and forth through level, and only `angular_drag` and the angular
    /// velocity limit bound the motion; it does not settle on its own.
    fn stability_torque(&self) -> Vector3<f64> {
        let omega = self.body.angular_velocity;
        let rate = omega.norm();
        if rate == 0.0 || self.config.motor_power == 0.0 {
            return Vector3::zeros();
        }

        let lookahead = rate * self.config.stability / self.config.motor_power;
        let predicted_up = rotate_about(&self.body.up(), &omega, lookahead);
        predicted_up.cross(&Vector3::y()) * self.config.stability * self.config.motor_power
    }

    fn spin_propellers(&mut self, dt: f64) {
        let rate = PROPELLER_SPIN_RATE * self.current_throttle;
        for (i, angle) in self.propeller_angles.iter_mut().enumerate() {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            *angle = wrap_degrees(*angle + direction * rate * dt);
        }
    }
}
