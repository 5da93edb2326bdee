use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use std::{env, io, time::Duration};

use quadsim::{
    components::{ControlInput, Part, Slot, Telemetry, ThrottleCommand},
    plugins::{PartDropped, SimulationPlugin, StartFlightRequested},
    resources::{AssemblyTracker, SimulationConfig},
    utils::SimError,
};

const CLIMB_TICKS: usize = 100;
const HOVER_TICKS: usize = 150;
const REPORT_EVERY: usize = 25;

/// Assembles the standard drone, unlocks flight, and flies a short scripted
/// climb, printing telemetry as JSON lines.
fn main() -> Result<(), SimError> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };
    let timestep = config.physics.timestep;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            timestep,
        )))
        .add_plugins(SimulationPlugin::with_config(config));

    // Startup spawns the workbench and the drone
    app.update();

    assemble(&mut app);
    app.update();

    let tracker = app.world().resource::<AssemblyTracker>();
    let progress = tracker.progress();
    info!(
        "Assembly {}/{} complete={}",
        progress.installed, progress.total, progress.complete
    );
    tracker.try_start_flight()?;

    app.world_mut().send_event(StartFlightRequested);
    app.update();

    set_controls(&mut app, ControlInput::throttle(ThrottleCommand::Increase));
    for tick in 0..CLIMB_TICKS {
        app.update();
        report(&mut app, tick)?;
    }

    set_controls(&mut app, ControlInput::neutral());
    for tick in CLIMB_TICKS..CLIMB_TICKS + HOVER_TICKS {
        app.update();
        report(&mut app, tick)?;
    }

    Ok(())
}

/// Drags every part onto the slot that takes its kind and drops it there.
fn assemble(app: &mut App) {
    let world = app.world_mut();
    let anchors: Vec<_> = world
        .query::<&Slot>()
        .iter(world)
        .map(|slot| (slot.required_kind(), slot.anchor().position))
        .collect();

    let mut dropped = Vec::new();
    let mut parts = world.query::<(Entity, &mut Part)>();
    for (entity, mut part) in parts.iter_mut(world) {
        let target = anchors
            .iter()
            .find(|(kind, _)| *kind == part.kind())
            .map(|(_, position)| *position);
        if let Some(position) = target {
            part.drag_to(position);
            dropped.push(entity);
        }
    }

    for part in dropped {
        world.send_event(PartDropped { part });
    }
}

fn set_controls(app: &mut App, input: ControlInput) {
    let world = app.world_mut();
    let mut controls = world.query::<&mut ControlInput>();
    for mut control in controls.iter_mut(world) {
        *control = input;
    }
}

fn report(app: &mut App, tick: usize) -> Result<(), SimError> {
    if tick % REPORT_EVERY != 0 {
        return Ok(());
    }
    let world = app.world_mut();
    let mut telemetry = world.query::<&Telemetry>();
    let mut out = io::stdout().lock();
    for readout in telemetry.iter(world) {
        readout.write_json_line(&mut out)?;
    }
    Ok(())
}
