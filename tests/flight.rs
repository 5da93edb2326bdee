mod common;

use approx::assert_relative_eq;
use common::*;
use nalgebra::Vector3;
use quadsim::{
    components::{ControlInput, FlightPhase, PartKind, Telemetry, ThrottleCommand},
    plugins::{DroneResetRequested, ResetReason, StartFlightRequested},
    resources::FlightSupervisorConfig,
};

fn unlock(app: &mut TestApp) {
    app.install_all(&PartKind::REQUIRED);
    app.send(StartFlightRequested);
    app.run_frame();
    assert_eq!(app.model().phase(), FlightPhase::Airborne);
}

#[test]
fn test_grounded_drone_spins_up_without_moving() {
    let mut app = TestAppBuilder::new().build();
    let spawn = app.model().body().position;

    app.set_controls(ControlInput::throttle(ThrottleCommand::Increase));
    app.run_steps(30);

    let model = app.model();
    assert!(model.current_throttle() > 0.0);
    assert!(model.motors().total() > 0.0);
    assert_position_eq(&model.body().position, &spawn, 1e-12);
}

#[test]
fn test_throttle_up_climbs_after_unlock() {
    let mut app = TestAppBuilder::new().build();
    unlock(&mut app);
    let start = app.model().body().altitude();

    app.set_controls(ControlInput::throttle(ThrottleCommand::Increase));
    app.run_steps(50);

    let model = app.model();
    assert_body_valid(model.body());
    assert!(model.body().altitude() > start);
    assert!(model.body().velocity.y > 0.0);
    // Level inputs keep the motors balanced
    let powers = model.motors().powers;
    assert!(powers.iter().all(|p| (p - powers[0]).abs() < 1e-9));
}

#[test]
fn test_zero_throttle_falls_and_resets_at_floor() {
    let mut app = TestAppBuilder::new()
        .with_quadcopter(dragless_quadcopter())
        .with_flight(low_floor_flight())
        .build();
    unlock(&mut app);

    let floor = low_floor_flight().reset_altitude;
    for _ in 0..60 {
        app.run_frame();
        assert!(app.model().body().altitude() >= floor);
    }

    let resets = &app.resource::<ResetLog>().0;
    assert!(!resets.is_empty());
    assert!(resets.iter().all(|r| r.reason == ResetReason::BelowFloor));
}

#[test]
fn test_manual_reset_returns_to_spawn() {
    let mut app = TestAppBuilder::new().build();
    unlock(&mut app);
    let spawn = FlightSupervisorConfig::default().spawn_position;

    app.set_controls(
        ControlInput::throttle(ThrottleCommand::Increase)
            .with_pitch(1.0)
            .with_roll(-0.5),
    );
    app.run_steps(40);
    assert!((app.model().body().position - spawn).norm() > 0.1);

    app.send(DroneResetRequested);
    app.run_frame();

    let body = app.model().body().clone();
    assert_position_eq(&body.position, &spawn, 1e-12);
    assert_relative_eq!(body.velocity.norm(), 0.0);
    assert_relative_eq!(body.angular_velocity.norm(), 0.0);
    assert_relative_eq!(body.attitude.angle(), 0.0);

    let resets = &app.resource::<ResetLog>().0;
    assert!(resets.iter().any(|r| r.reason == ResetReason::Requested));
}

#[test]
fn test_pitch_loads_front_motors_and_tilts() {
    let mut app = TestAppBuilder::new().build();
    unlock(&mut app);

    app.set_controls(ControlInput::throttle(ThrottleCommand::Increase).with_pitch(1.0));
    app.run_steps(10);

    let model = app.model();
    let powers = model.motors().powers;
    // Front pair above rear pair
    assert!(powers[0] > powers[3]);
    assert!(powers[1] > powers[2]);
    assert!(model.body().attitude.angle() > 0.0);
    assert_body_valid(model.body());
}

#[test]
fn test_telemetry_tracks_the_model() {
    let mut app = TestAppBuilder::new().build();
    unlock(&mut app);

    app.set_controls(ControlInput::throttle(ThrottleCommand::Increase));
    app.run_steps(20);

    let throttle = app.model().current_throttle();
    let altitude = app.model().body().altitude();
    let telemetry = *app.query_single::<Telemetry>().expect("telemetry");
    assert_relative_eq!(telemetry.throttle_percent, throttle * 100.0);
    assert_relative_eq!(telemetry.altitude, altitude);
    assert!(telemetry.motor_powers.iter().all(|p| *p > 0.0));
}

#[test]
fn test_long_flight_stays_finite() {
    let mut app = TestAppBuilder::new().build();
    unlock(&mut app);

    let inputs = [
        ControlInput::throttle(ThrottleCommand::Increase).with_yaw(1.0),
        ControlInput::neutral().with_roll(1.0),
        ControlInput::throttle(ThrottleCommand::Decrease).with_pitch(-1.0),
    ];
    for input in inputs.into_iter().cycle().take(30) {
        app.set_controls(input);
        app.run_steps(10);
        assert_body_valid(app.model().body());
    }

    let velocity: Vector3<f64> = app.model().body().velocity;
    assert!(velocity.norm() <= 500.0);
}
