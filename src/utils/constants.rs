pub const GRAVITY: f64 = 9.81; // m/s^2

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 50.0; // Fixed physics step [s]
pub const MAX_ANGULAR_VELOCITY: f64 = 7.0; // rad/s
pub const MAX_VELOCITY: f64 = 500.0; // m/s

// Control allocation weights, relative to motor power
pub const PITCH_MIX_WEIGHT: f64 = 0.3;
pub const ROLL_MIX_WEIGHT: f64 = 0.3;
pub const YAW_MIX_WEIGHT: f64 = 0.2;

pub const MOTOR_COUNT: usize = 4;

// Propeller animation rate at full throttle [deg/s]
pub const PROPELLER_SPIN_RATE: f64 = 500.0;

pub const DEFAULT_SNAP_DISTANCE: f64 = 0.5; // m
pub const DEFAULT_RESET_ALTITUDE: f64 = -10.0; // m
