pub mod assembly;
pub mod physics;
pub mod quadcopter;
pub mod spatial;

pub use assembly::{
    standard_parts, standard_slots, Part, PartId, PartKind, Slot, SlotFeedback, SlotHighlight,
};
pub use physics::{Force, Moment, PhysicsComponent, ReferenceFrame};
pub use quadcopter::{
    mix, motor_offset, AxisCommand, ControlInput, FlightDynamicsModel, FlightPhase,
    FlightSupervisor, MotorState, StepOutput, Telemetry, ThrottleCommand,
};
pub use spatial::{Pose, RigidBodyState};
