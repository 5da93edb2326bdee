use bevy::prelude::*;

use crate::components::{
    ControlInput, FlightDynamicsModel, FlightSupervisor, Pose, Telemetry,
};
use crate::plugins::{DroneReset, DroneResetRequested, FlightUnlocked, ResetReason};
use crate::resources::{FlightSupervisorConfig, PhysicsConfig, QuadcopterConfig};

/// Spawns one grounded drone at the configured spawn pose.
pub fn spawn_quadcopter(
    mut commands: Commands,
    quadcopter: Res<QuadcopterConfig>,
    physics: Res<PhysicsConfig>,
    flight: Res<FlightSupervisorConfig>,
) {
    let spawn = Pose::new(flight.spawn_position, flight.spawn_attitude);
    let model = FlightDynamicsModel::new(quadcopter.clone(), physics.clone(), spawn);

    let entity = commands
        .spawn((
            model,
            ControlInput::neutral(),
            FlightSupervisor::from_config(&flight),
            Telemetry::default(),
        ))
        .id();
    info!("Spawned quadcopter {:?} at {:?}", entity, spawn.position);
}

pub fn activate_on_unlock(
    mut unlocked: EventReader<FlightUnlocked>,
    mut drones: Query<&mut FlightDynamicsModel>,
) {
    if unlocked.read().count() == 0 {
        return;
    }
    for mut model in drones.iter_mut() {
        model.activate();
    }
}

/// Advances every drone by one fixed tick.
pub fn quadcopter_step_system(
    time: Res<Time<Fixed>>,
    mut drones: Query<(&mut FlightDynamicsModel, &ControlInput, &mut Telemetry)>,
) {
    let dt = time.delta_secs_f64();
    if dt <= 0.0 {
        return;
    }

    drones
        .par_iter_mut()
        .for_each(|(mut model, controls, mut telemetry)| {
            let output = model.step(dt, controls);
            *telemetry = Telemetry::from_output(&output);
        });
}

pub fn altitude_reset_system(
    mut drones: Query<(Entity, &mut FlightDynamicsModel, &FlightSupervisor)>,
    mut resets: EventWriter<DroneReset>,
) {
    for (entity, mut model, supervisor) in drones.iter_mut() {
        if supervisor.check(&mut model) {
            resets.send(DroneReset {
                drone: entity,
                reason: ResetReason::BelowFloor,
            });
        }
    }
}

pub fn handle_reset_requests(
    mut requests: EventReader<DroneResetRequested>,
    mut drones: Query<(Entity, &mut FlightDynamicsModel, &FlightSupervisor)>,
    mut resets: EventWriter<DroneReset>,
) {
    if requests.read().count() == 0 {
        return;
    }
    for (entity, mut model, supervisor) in drones.iter_mut() {
        supervisor.reset(&mut model);
        debug!("Drone {:?} reset on request", entity);
        resets.send(DroneReset {
            drone: entity,
            reason: ResetReason::Requested,
        });
    }
}
