use approx::assert_relative_eq;
use nalgebra::Vector3;
use quadsim::components::RigidBodyState;

/// Assert that a rigid body's state is finite and its attitude normalized
#[track_caller]
pub fn assert_body_valid(body: &RigidBodyState) {
    assert!(body.position.iter().all(|v| v.is_finite()), "Position is not finite");
    assert!(body.velocity.iter().all(|v| v.is_finite()), "Velocity is not finite");
    assert!(
        body.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite"
    );
    assert_relative_eq!(body.attitude.quaternion().norm(), 1.0, epsilon = 1e-9);
}

#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
