mod controls;
mod model;
mod motors;
mod supervisor;
mod telemetry;

pub use controls::{ControlInput, ThrottleCommand};
pub use model::{FlightDynamicsModel, FlightPhase, StepOutput};
pub use motors::{mix, motor_offset, AxisCommand, MotorState};
pub use supervisor::FlightSupervisor;
pub use telemetry::Telemetry;
