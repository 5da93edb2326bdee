use quadsim::{
    components::PartKind,
    resources::{FlightSupervisorConfig, QuadcopterConfig},
};

/// Every required kind except the flight controller.
pub fn all_but_flight_controller() -> Vec<PartKind> {
    PartKind::REQUIRED
        .into_iter()
        .filter(|kind| *kind != PartKind::FlightController)
        .collect()
}

/// A drone with no drag, so falls are quick and easy to predict.
pub fn dragless_quadcopter() -> QuadcopterConfig {
    QuadcopterConfig {
        drag: 0.0,
        angular_drag: 0.0,
        ..QuadcopterConfig::default()
    }
}

pub fn low_floor_flight() -> FlightSupervisorConfig {
    FlightSupervisorConfig {
        reset_altitude: -1.0,
        ..FlightSupervisorConfig::default()
    }
}
