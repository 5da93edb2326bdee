use bevy::prelude::*;

use crate::plugins::{
    AssemblyResetRequested, FlightRejected, FlightUnlocked, PartDropped, PartRemovalRequested,
    StartFlightRequested,
};
use crate::resources::{AssemblyConfig, AssemblyTracker};
use crate::systems::{
    handle_assembly_reset, handle_flight_requests, handle_part_drops, handle_part_removals,
    spawn_workbench, update_slot_highlights,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AssemblySet {
    Placement,
    Feedback,
    Gate,
}

/// Workbench slots, loose parts, and the completion gate in front of the
/// flight phase.
#[derive(Default)]
pub struct AssemblyPlugin {
    pub config: AssemblyConfig,
}

impl AssemblyPlugin {
    pub fn with_config(config: AssemblyConfig) -> Self {
        Self { config }
    }
}

impl Plugin for AssemblyPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(AssemblyTracker::new(&self.config.required_parts));

        app.add_event::<PartDropped>()
            .add_event::<PartRemovalRequested>()
            .add_event::<AssemblyResetRequested>()
            .add_event::<StartFlightRequested>()
            .add_event::<FlightUnlocked>()
            .add_event::<FlightRejected>();

        app.add_systems(Startup, spawn_workbench);

        app.configure_sets(
            Update,
            (
                AssemblySet::Placement,
                AssemblySet::Feedback,
                AssemblySet::Gate,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (handle_assembly_reset, handle_part_removals, handle_part_drops)
                    .chain()
                    .in_set(AssemblySet::Placement),
                update_slot_highlights.in_set(AssemblySet::Feedback),
                handle_flight_requests.in_set(AssemblySet::Gate),
            ),
        );
    }
}
