use crate::components::{PhysicsComponent, ReferenceFrame, RigidBodyState};
use nalgebra::Vector3;

/// Resolve the queued forces and moments into a world-frame net force and
/// net moment about the centre of mass. Gravity is added from `gravity`.
pub fn accumulate_forces(
    physics: &mut PhysicsComponent,
    body: &RigidBodyState,
    gravity: &Vector3<f64>,
) {
    let mut net_force = gravity * physics.mass;
    let mut net_moment = Vector3::zeros();

    for force in &physics.forces {
        let (force_inertial, point_inertial) = match force.frame {
            ReferenceFrame::Body => (
                body.attitude * force.vector,
                force.point.map(|p| body.attitude * p),
            ),
            ReferenceFrame::Inertial => (force.vector, force.point),
        };

        net_force += force_inertial;

        if let Some(point) = point_inertial {
            net_moment += point.cross(&force_inertial);
        }
    }

    for moment in &physics.moments {
        net_moment += match moment.frame {
            ReferenceFrame::Body => body.attitude * moment.vector,
            ReferenceFrame::Inertial => moment.vector,
        };
    }

    physics.net_force = net_force;
    physics.net_moment = net_moment;
}
