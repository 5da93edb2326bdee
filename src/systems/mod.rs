mod assembly;
mod flight;

pub use assembly::{
    handle_assembly_reset, handle_flight_requests, handle_part_drops, handle_part_removals,
    spawn_workbench, update_slot_highlights,
};
pub use flight::{
    activate_on_unlock, altitude_reset_system, handle_reset_requests, quadcopter_step_system,
    spawn_quadcopter,
};
