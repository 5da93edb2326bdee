use crate::components::{PhysicsComponent, RigidBodyState};
use nalgebra::{UnitQuaternion, Vector3};

/// Structure to hold state derivatives for RK integration
struct StateDerivatives {
    velocity: Vector3<f64>,
    acceleration: Vector3<f64>,
    angular_acceleration: Vector3<f64>,
}

/// Calculate derivatives for the current state.
///
/// Net force and moment are held constant over the step; the gyroscopic term
/// is evaluated in the body frame where the inertia tensor is constant.
fn calculate_derivatives(
    physics: &PhysicsComponent,
    velocity: &Vector3<f64>,
    attitude: &UnitQuaternion<f64>,
    angular_velocity: &Vector3<f64>,
) -> StateDerivatives {
    let acceleration = if physics.mass > 0.0 {
        physics.net_force / physics.mass
    } else {
        Vector3::zeros()
    };

    let omega_body = attitude.inverse_transform_vector(angular_velocity);
    let moment_body = attitude.inverse_transform_vector(&physics.net_moment);
    let gyro_term = omega_body.cross(&(physics.inertia * omega_body));
    let angular_acceleration_body = physics.inertia_inv * (moment_body - gyro_term);

    StateDerivatives {
        velocity: *velocity,
        acceleration,
        angular_acceleration: attitude * angular_acceleration_body,
    }
}

fn rotate_by(
    angular_velocity: &Vector3<f64>,
    dt: f64,
    attitude: &UnitQuaternion<f64>,
) -> UnitQuaternion<f64> {
    if angular_velocity.norm() > 0.0 {
        UnitQuaternion::from_scaled_axis(angular_velocity * dt) * attitude
    } else {
        *attitude
    }
}

/// Advance `body` by `dt` seconds under the net force and moment currently
/// stored in `physics` using classical RK4.
pub fn integrate_state(physics: &PhysicsComponent, body: &mut RigidBodyState, dt: f64) {
    if dt <= 0.0 {
        return;
    }

    let initial_position = body.position;
    let initial_velocity = body.velocity;
    let initial_attitude = body.attitude;
    let initial_angular_velocity = body.angular_velocity;

    let k1 = calculate_derivatives(
        physics,
        &initial_velocity,
        &initial_attitude,
        &initial_angular_velocity,
    );

    let k2_velocity = initial_velocity + k1.acceleration * (dt / 2.0);
    let k2_angular_vel = initial_angular_velocity + k1.angular_acceleration * (dt / 2.0);
    let k2_attitude = rotate_by(&k2_angular_vel, dt / 2.0, &initial_attitude);
    let k2 = calculate_derivatives(physics, &k2_velocity, &k2_attitude, &k2_angular_vel);

    let k3_velocity = initial_velocity + k2.acceleration * (dt / 2.0);
    let k3_angular_vel = initial_angular_velocity + k2.angular_acceleration * (dt / 2.0);
    let k3_attitude = rotate_by(&k3_angular_vel, dt / 2.0, &initial_attitude);
    let k3 = calculate_derivatives(physics, &k3_velocity, &k3_attitude, &k3_angular_vel);

    let k4_velocity = initial_velocity + k3.acceleration * dt;
    let k4_angular_vel = initial_angular_velocity + k3.angular_acceleration * dt;
    let k4_attitude = rotate_by(&k4_angular_vel, dt, &initial_attitude);
    let k4 = calculate_derivatives(physics, &k4_velocity, &k4_attitude, &k4_angular_vel);

    body.position = initial_position
        + (dt / 6.0) * (k1.velocity + 2.0 * k2.velocity + 2.0 * k3.velocity + k4.velocity);
    body.velocity = initial_velocity
        + (dt / 6.0)
            * (k1.acceleration + 2.0 * k2.acceleration + 2.0 * k3.acceleration + k4.acceleration);
    body.angular_velocity = initial_angular_velocity
        + (dt / 6.0)
            * (k1.angular_acceleration
                + 2.0 * k2.angular_acceleration
                + 2.0 * k3.angular_acceleration
                + k4.angular_acceleration);

    let omega_avg = (1.0 / 6.0)
        * (initial_angular_velocity + 2.0 * k2_angular_vel + 2.0 * k3_angular_vel + k4_angular_vel);
    let attitude = rotate_by(&omega_avg, dt, &initial_attitude);
    body.attitude = UnitQuaternion::from_quaternion(attitude.into_inner().normalize());
}

/// Linear velocity damping, `v *= max(0, 1 - drag * dt)`, applied to both
/// linear and angular velocity with their own coefficients.
pub fn apply_damping(body: &mut RigidBodyState, drag: f64, angular_drag: f64, dt: f64) {
    body.velocity *= (1.0 - drag.max(0.0) * dt).max(0.0);
    body.angular_velocity *= (1.0 - angular_drag.max(0.0) * dt).max(0.0);
}

/// Applies velocity and angular velocity limits to prevent excessive motion.
pub fn apply_velocity_limits(
    body: &mut RigidBodyState,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = body.velocity.norm();
    if velocity_norm > max_velocity {
        body.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = body.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        body.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cube() -> PhysicsComponent {
        PhysicsComponent::solid_box(1.0, Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_free_fall() {
        let mut physics = unit_cube();
        physics.net_force = Vector3::new(0.0, -9.81, 0.0);
        let mut body =
            RigidBodyState::at_pose(Vector3::new(0.0, 100.0, 0.0), UnitQuaternion::identity());

        let dt = 0.01;
        for _ in 0..100 {
            integrate_state(&physics, &mut body, dt);
        }

        // Constant acceleration is integrated exactly by RK4.
        assert_relative_eq!(body.velocity.y, -9.81, epsilon = 1e-9);
        assert_relative_eq!(body.position.y, 100.0 - 0.5 * 9.81, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_spin() {
        let physics = unit_cube();
        let rate = 0.5;
        let mut body = RigidBodyState::new(
            Vector3::zeros(),
            Vector3::zeros(),
            UnitQuaternion::identity(),
            Vector3::new(0.0, rate, 0.0),
        );

        for _ in 0..100 {
            integrate_state(&physics, &mut body, 0.01);
        }

        let expected = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), rate);
        assert!(body.attitude.angle_to(&expected) < 1e-6);
        assert_relative_eq!(body.angular_velocity, Vector3::new(0.0, rate, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut physics = unit_cube();
        physics.net_force = Vector3::new(5.0, 5.0, 5.0);
        let mut body = RigidBodyState::default();

        integrate_state(&physics, &mut body, 0.0);

        assert_eq!(body, RigidBodyState::default());
    }

    #[test]
    fn test_numerical_stability() {
        for dt in [0.001, 0.02, 0.1] {
            let mut physics = unit_cube();
            physics.net_force = Vector3::new(10.0, 5.0, -20.0);
            physics.net_moment = Vector3::new(0.1, -0.05, 0.025);
            let mut body = RigidBodyState::new(
                Vector3::zeros(),
                Vector3::new(1.0, 0.0, 0.5),
                UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
                Vector3::new(0.05, 0.1, -0.03),
            );

            let steps = (2.0 / dt) as usize;
            for _ in 0..steps {
                integrate_state(&physics, &mut body, dt);
                apply_velocity_limits(&mut body, 500.0, 7.0);
                assert!(body.is_finite(), "state became non-finite with dt={}", dt);
                assert_relative_eq!(body.attitude.as_ref().norm(), 1.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_damping() {
        let mut body = RigidBodyState::new(
            Vector3::zeros(),
            Vector3::new(10.0, 0.0, 0.0),
            UnitQuaternion::identity(),
            Vector3::new(0.0, 2.0, 0.0),
        );

        apply_damping(&mut body, 5.0, 5.0, 0.02);
        assert_relative_eq!(body.velocity.x, 9.0);
        assert_relative_eq!(body.angular_velocity.y, 1.8);

        // Damping never reverses motion.
        apply_damping(&mut body, 100.0, 100.0, 1.0);
        assert_eq!(body.velocity, Vector3::zeros());
        assert_eq!(body.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn test_velocity_limits() {
        let mut body = RigidBodyState::new(
            Vector3::zeros(),
            Vector3::new(300.0, 400.0, 0.0),
            UnitQuaternion::identity(),
            Vector3::new(0.0, 0.0, 20.0),
        );

        apply_velocity_limits(&mut body, 100.0, 7.0);

        assert_relative_eq!(body.velocity.norm(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(body.angular_velocity.norm(), 7.0, epsilon = 1e-9);
    }
}
