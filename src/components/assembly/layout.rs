use nalgebra::Vector3;

use super::part::{Part, PartKind};
use super::slot::Slot;
use crate::components::Pose;

const MOTOR_OFFSET: f64 = 0.8;
const MOTOR_HEIGHT: f64 = 0.2;
const PROPELLER_HEIGHT: f64 = 0.4;

/// Corner of the frame for motor/propeller `index` (1-based): front-left,
/// front-right, rear-right, rear-left.
fn corner(index: usize, height: f64) -> Vector3<f64> {
    let (x, z) = match index {
        1 => (-MOTOR_OFFSET, MOTOR_OFFSET),
        2 => (MOTOR_OFFSET, MOTOR_OFFSET),
        3 => (MOTOR_OFFSET, -MOTOR_OFFSET),
        _ => (-MOTOR_OFFSET, -MOTOR_OFFSET),
    };
    Vector3::new(x, height, z)
}

/// The eleven slots of the standard workbench.
pub fn standard_slots() -> Vec<Slot> {
    let motors = [
        PartKind::Motor1,
        PartKind::Motor2,
        PartKind::Motor3,
        PartKind::Motor4,
    ];
    let propellers = [
        PartKind::Propeller1,
        PartKind::Propeller2,
        PartKind::Propeller3,
        PartKind::Propeller4,
    ];

    let mut slots =
        vec![Slot::new(PartKind::Frame, Pose::at(Vector3::zeros())).with_trigger_radius(1.1)];
    for (i, kind) in motors.into_iter().enumerate() {
        slots.push(Slot::new(kind, Pose::at(corner(i + 1, MOTOR_HEIGHT))).with_trigger_radius(0.3));
    }
    for (i, kind) in propellers.into_iter().enumerate() {
        slots.push(
            Slot::new(kind, Pose::at(corner(i + 1, PROPELLER_HEIGHT))).with_trigger_radius(0.25),
        );
    }
    slots.push(
        Slot::new(PartKind::Battery, Pose::at(Vector3::new(0.0, -0.1, 0.0)))
            .with_trigger_radius(0.3),
    );
    slots.push(
        Slot::new(PartKind::FlightController, Pose::at(Vector3::new(0.0, 0.1, 0.0)))
            .with_trigger_radius(0.2),
    );
    slots
}

/// One part per required kind, laid out on a grid four to a row.
pub fn standard_parts() -> Vec<Part> {
    const START_X: f64 = -6.0;
    const SPACING: f64 = 3.0;
    const PER_ROW: usize = 4;

    PartKind::REQUIRED
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let x = START_X + (i % PER_ROW) as f64 * SPACING;
            let z = -((i / PER_ROW) as f64) * SPACING;
            Part::new(*kind, Pose::at(Vector3::new(x, 1.0, z)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_one_slot_per_required_kind() {
        let kinds: BTreeSet<_> = standard_slots().iter().map(|s| s.required_kind()).collect();
        let required: BTreeSet<_> = PartKind::REQUIRED.into_iter().collect();
        assert_eq!(kinds, required);
        assert_eq!(standard_slots().len(), 11);
    }

    #[test]
    fn test_parts_start_away_from_slots() {
        let slots = standard_slots();
        for part in standard_parts() {
            assert!(
                slots.iter().all(|slot| !slot.accepts(&part)),
                "{} starts inside a slot",
                part.kind()
            );
        }
    }

    #[test]
    fn test_propellers_sit_above_motors() {
        let slots = standard_slots();
        let anchor = |kind| {
            slots
                .iter()
                .find(|s| s.required_kind() == kind)
                .map(|s| s.anchor().position)
                .unwrap()
        };
        let motor = anchor(PartKind::Motor3);
        let propeller = anchor(PartKind::Propeller3);
        assert_eq!(motor.x, propeller.x);
        assert_eq!(motor.z, propeller.z);
        assert!(propeller.y > motor.y);
    }
}
