use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::components::Pose;

/// Every kind of part that can be placed on the workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Frame,
    Motor1,
    Motor2,
    Motor3,
    Motor4,
    Propeller1,
    Propeller2,
    Propeller3,
    Propeller4,
    Battery,
    FlightController,
    /// Optional accessory, never required for flight
    Camera,
}

impl PartKind {
    /// Kinds a quadcopter needs before it may fly.
    pub const REQUIRED: [PartKind; 11] = [
        PartKind::Frame,
        PartKind::Motor1,
        PartKind::Motor2,
        PartKind::Motor3,
        PartKind::Motor4,
        PartKind::Propeller1,
        PartKind::Propeller2,
        PartKind::Propeller3,
        PartKind::Propeller4,
        PartKind::Battery,
        PartKind::FlightController,
    ];

    pub const ALL: [PartKind; 12] = [
        PartKind::Frame,
        PartKind::Motor1,
        PartKind::Motor2,
        PartKind::Motor3,
        PartKind::Motor4,
        PartKind::Propeller1,
        PartKind::Propeller2,
        PartKind::Propeller3,
        PartKind::Propeller4,
        PartKind::Battery,
        PartKind::FlightController,
        PartKind::Camera,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PartKind::Frame => "Frame",
            PartKind::Motor1 => "Motor 1",
            PartKind::Motor2 => "Motor 2",
            PartKind::Motor3 => "Motor 3",
            PartKind::Motor4 => "Motor 4",
            PartKind::Propeller1 => "Propeller 1",
            PartKind::Propeller2 => "Propeller 2",
            PartKind::Propeller3 => "Propeller 3",
            PartKind::Propeller4 => "Propeller 4",
            PartKind::Battery => "Battery",
            PartKind::FlightController => "Flight controller",
            PartKind::Camera => "Camera",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId(Uuid);

impl PartId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draggable part. While installed it is owned by the slot holding it and
/// follows that slot's pose; its collider is disabled.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    kind: PartKind,
    installed: bool,
    pose: Pose,
    home: Pose,
    collider_enabled: bool,
}

impl Part {
    /// Create a free-standing part resting at its home pose.
    pub fn new(kind: PartKind, home: Pose) -> Self {
        Self {
            id: PartId::new(),
            kind,
            installed: false,
            pose: home,
            home,
            collider_enabled: true,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn home(&self) -> &Pose {
        &self.home
    }

    pub fn collider_enabled(&self) -> bool {
        self.collider_enabled
    }

    /// Move a free part. Installed parts cannot be dragged.
    pub fn drag_to(&mut self, position: Vector3<f64>) -> bool {
        if self.installed {
            return false;
        }
        self.pose.position = position;
        true
    }

    /// Strictly closer than `threshold` to `point`.
    pub fn is_near(&self, point: &Vector3<f64>, threshold: f64) -> bool {
        self.pose.distance_to(point) < threshold
    }

    pub(crate) fn install_to(&mut self, anchor: &Pose) {
        self.installed = true;
        self.pose = *anchor;
        self.collider_enabled = false;
    }

    pub(crate) fn reset_to_home(&mut self) {
        self.installed = false;
        self.pose = self.home;
        self.collider_enabled = true;
    }
}
