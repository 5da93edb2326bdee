#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_body_valid, assert_position_eq};
pub use fixtures::*;
pub use test_app::{ResetLog, TestApp, TestAppBuilder};
