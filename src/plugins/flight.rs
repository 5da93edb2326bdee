use bevy::prelude::*;

use crate::plugins::{AssemblySet, DroneReset, DroneResetRequested, FlightUnlocked};
use crate::resources::{FlightSupervisorConfig, PhysicsConfig, QuadcopterConfig};
use crate::systems::{
    activate_on_unlock, altitude_reset_system, handle_reset_requests, quadcopter_step_system,
    spawn_quadcopter,
};

/// Flight simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Dynamics,
    Supervision,
}

#[derive(Default)]
pub struct FlightPlugin {
    pub quadcopter: QuadcopterConfig,
    pub physics: PhysicsConfig,
    pub flight: FlightSupervisorConfig,
}

impl FlightPlugin {
    pub fn with_config(
        quadcopter: QuadcopterConfig,
        physics: PhysicsConfig,
        flight: FlightSupervisorConfig,
    ) -> Self {
        Self {
            quadcopter,
            physics,
            flight,
        }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.quadcopter.clone())
            .insert_resource(self.physics.clone())
            .insert_resource(self.flight.clone());

        app.insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep));

        // FlightUnlocked may already be registered by the assembly plugin
        app.add_event::<FlightUnlocked>()
            .add_event::<DroneResetRequested>()
            .add_event::<DroneReset>();

        app.add_systems(Startup, spawn_quadcopter);

        app.add_systems(
            Update,
            (activate_on_unlock.after(AssemblySet::Gate), handle_reset_requests),
        );

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Supervision).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                quadcopter_step_system.in_set(FlightSet::Dynamics),
                altitude_reset_system.in_set(FlightSet::Supervision),
            ),
        );
    }
}
