use bevy::prelude::*;

use crate::utils::AssemblyError;

/// A dragged part was released somewhere in the scene.
#[derive(Event, Debug, Clone, Copy)]
pub struct PartDropped {
    pub part: Entity,
}

/// The user asked to pull the part out of a slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct PartRemovalRequested {
    pub slot: Entity,
}

/// Clear every slot and send all parts home.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct AssemblyResetRequested;

/// The "start flight" button was pressed.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartFlightRequested;

/// Emitted once the assembly gate lets the flight phase begin.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct FlightUnlocked;

#[derive(Event, Debug, Clone)]
pub struct FlightRejected {
    pub reason: AssemblyError,
}

/// Manual reset of every drone back to its spawn pose.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DroneResetRequested;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    BelowFloor,
    Requested,
}

/// A drone was teleported back to its spawn pose.
#[derive(Event, Debug, Clone, Copy)]
pub struct DroneReset {
    pub drone: Entity,
    pub reason: ResetReason,
}
