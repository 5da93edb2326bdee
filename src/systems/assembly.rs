use bevy::prelude::*;

use crate::components::{Part, PartKind, Slot, SlotFeedback, SlotHighlight};
use crate::plugins::{
    AssemblyResetRequested, FlightRejected, FlightUnlocked, PartDropped, PartRemovalRequested,
    StartFlightRequested,
};
use crate::resources::{AssemblyConfig, AssemblyTracker};

/// Spawns the standard slots and loose parts.
pub fn spawn_workbench(mut commands: Commands, config: Res<AssemblyConfig>) {
    for slot in crate::components::standard_slots() {
        let slot = slot.with_snap_distance(config.snap_distance);
        commands.spawn((slot, SlotHighlight::default()));
    }

    let parts = crate::components::standard_parts();
    info!("Spawned workbench with {} parts", parts.len());
    for part in parts {
        commands.spawn(part);
    }
}

/// Offers every dropped part to the slots until one accepts it.
pub fn handle_part_drops(
    mut drops: EventReader<PartDropped>,
    mut parts: Query<&mut Part>,
    mut slots: Query<&mut Slot>,
    mut tracker: ResMut<AssemblyTracker>,
) {
    for drop in drops.read() {
        let Ok(mut part) = parts.get_mut(drop.part) else {
            warn!("Dropped entity {:?} is not a part", drop.part);
            continue;
        };

        let installed = slots
            .iter_mut()
            .any(|mut slot| slot.try_install(&mut part, &mut tracker));

        if !installed {
            debug!("{} dropped away from any free matching slot", part.kind());
        }
    }
}

pub fn handle_part_removals(
    mut requests: EventReader<PartRemovalRequested>,
    mut slots: Query<&mut Slot>,
    mut parts: Query<&mut Part>,
    mut tracker: ResMut<AssemblyTracker>,
) {
    for request in requests.read() {
        let Ok(mut slot) = slots.get_mut(request.slot) else {
            warn!("Removal requested for unknown slot {:?}", request.slot);
            continue;
        };
        let Some(part_id) = slot.installed_part() else {
            continue;
        };

        if let Some(mut part) = parts.iter_mut().find(|part| part.id() == part_id) {
            slot.remove(&mut part, &mut tracker);
        }
    }
}

/// Recomputes the highlight of each free slot from the parts inside its trigger.
pub fn update_slot_highlights(
    mut slots: Query<(&Slot, &mut SlotHighlight)>,
    parts: Query<&Part>,
) {
    for (slot, mut highlight) in slots.iter_mut() {
        let mut feedback = None;
        for part in parts.iter() {
            match slot.feedback(part) {
                Some(SlotFeedback::Valid) => {
                    feedback = Some(SlotFeedback::Valid);
                    break;
                }
                Some(SlotFeedback::Invalid) => feedback = Some(SlotFeedback::Invalid),
                None => {}
            }
        }

        if highlight.0 != feedback {
            highlight.0 = feedback;
        }
    }
}

pub fn handle_assembly_reset(
    mut requests: EventReader<AssemblyResetRequested>,
    config: Res<AssemblyConfig>,
    mut tracker: ResMut<AssemblyTracker>,
    mut slots: Query<&mut Slot>,
    mut parts: Query<&mut Part>,
) {
    if requests.read().count() == 0 {
        return;
    }

    tracker.initialize(&config.required_parts);
    for mut slot in slots.iter_mut() {
        slot.reset();
    }
    for mut part in parts.iter_mut() {
        part.reset_to_home();
    }
    info!("Assembly reset, {} parts required", tracker.required().len());
}

/// Gates the flight phase on assembly completion.
pub fn handle_flight_requests(
    mut requests: EventReader<StartFlightRequested>,
    tracker: Res<AssemblyTracker>,
    mut unlocked: EventWriter<FlightUnlocked>,
    mut rejected: EventWriter<FlightRejected>,
) {
    for _ in requests.read() {
        match tracker.try_start_flight() {
            Ok(()) => {
                info!("Assembly complete, flight unlocked");
                unlocked.send(FlightUnlocked);
            }
            Err(reason) => {
                let missing: Vec<PartKind> = tracker.missing().collect();
                warn!("{}; missing {:?}", reason, missing);
                rejected.send(FlightRejected { reason });
            }
        }
    }
}
