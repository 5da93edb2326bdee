use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid-body state of a simulated vehicle.
///
/// The world frame is y-up. Angular velocity is expressed in the world frame,
/// matching the convention used when torques are accumulated.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl RigidBodyState {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a body at rest at a specific pose
    pub fn at_pose(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            attitude,
            ..Default::default()
        }
    }

    /// Body up axis expressed in the world frame
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Body forward axis expressed in the world frame
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    /// Body right axis expressed in the world frame
    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Teleport to a pose and drop all motion.
    pub fn teleport(&mut self, position: Vector3<f64>, attitude: UnitQuaternion<f64>) {
        self.position = position;
        self.attitude = attitude;
        self.velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.angular_velocity.iter().all(|v| v.is_finite())
            && self.attitude.as_ref().coords.iter().all(|v| v.is_finite())
    }
}

/// Static position and orientation, used for slot anchors and part poses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vector3::zeros())
    }
}

impl Pose {
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn at(position: Vector3<f64>) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    pub fn distance_to(&self, point: &Vector3<f64>) -> f64 {
        (self.position - point).norm()
    }
}
