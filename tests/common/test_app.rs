use bevy::{prelude::*, time::TimeUpdateStrategy};
use nalgebra::Vector3;
use std::time::Duration;

use quadsim::{
    components::{ControlInput, FlightDynamicsModel, Part, PartKind, Slot},
    plugins::{DroneReset, PartDropped, SimulationPlugin},
    resources::{AssemblyConfig, FlightSupervisorConfig, QuadcopterConfig, SimulationConfig},
};

/// Every `DroneReset` seen since the app was built.
#[derive(Resource, Default)]
pub struct ResetLog(pub Vec<DroneReset>);

fn record_resets(mut resets: EventReader<DroneReset>, mut log: ResMut<ResetLog>) {
    log.0.extend(resets.read().copied());
}

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quadcopter(mut self, config: QuadcopterConfig) -> Self {
        self.config.quadcopter = config;
        self
    }

    pub fn with_assembly(mut self, config: AssemblyConfig) -> Self {
        self.config.assembly = config;
        self
    }

    pub fn with_flight(mut self, config: FlightSupervisorConfig) -> Self {
        self.config.flight = config;
        self
    }

    pub fn build(self) -> TestApp {
        let timestep = self.config.physics.timestep;
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                timestep,
            )))
            .add_plugins(SimulationPlugin::with_config(self.config))
            .init_resource::<ResetLog>()
            .add_systems(Update, record_resets);

        // Run an initial update so startup systems spawn the scene
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    pub fn model(&mut self) -> &FlightDynamicsModel {
        self.query_single::<FlightDynamicsModel>()
            .expect("exactly one drone")
    }

    pub fn set_controls(&mut self, input: ControlInput) {
        *self
            .query_single_mut::<ControlInput>()
            .expect("exactly one drone") = input;
    }

    pub fn part_entity(&mut self, kind: PartKind) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Part)>();
        query
            .iter(world)
            .find(|(_, part)| part.kind() == kind)
            .map(|(entity, _)| entity)
            .expect("part spawned")
    }

    pub fn slot_entity(&mut self, kind: PartKind) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Slot)>();
        query
            .iter(world)
            .find(|(_, slot)| slot.required_kind() == kind)
            .map(|(entity, _)| entity)
            .expect("slot spawned")
    }

    pub fn slot_anchor(&mut self, kind: PartKind) -> Vector3<f64> {
        let entity = self.slot_entity(kind);
        self.app.world().get::<Slot>(entity).expect("slot").anchor().position
    }

    /// Drag the part of `kind` to `position` and release it there.
    pub fn drop_part_at(&mut self, kind: PartKind, position: Vector3<f64>) {
        let entity = self.part_entity(kind);
        self.app
            .world_mut()
            .get_mut::<Part>(entity)
            .expect("part")
            .drag_to(position);
        self.send(PartDropped { part: entity });
        self.run_frame();
    }

    /// Drop the part of `kind` onto its own slot.
    pub fn install(&mut self, kind: PartKind) {
        let anchor = self.slot_anchor(kind);
        self.drop_part_at(kind, anchor);
    }

    pub fn install_all(&mut self, kinds: &[PartKind]) {
        for &kind in kinds {
            self.install(kind);
        }
    }

    pub fn part(&mut self, kind: PartKind) -> &Part {
        let entity = self.part_entity(kind);
        self.app.world().get::<Part>(entity).expect("part")
    }
}
