//! Fixed-step time integration.
//!
//! One `euler_step` advances every body by one `Parameters::timestep`:
//! forces are summed from the current positions, the velocity is updated
//! first (forward Euler), and the position then moves with the just-updated
//! velocity. The new position is appended to the body's trail.
//!
//! Bodies are updated strictly in index order, in place: a body later in
//! the list sees the already-moved positions of bodies earlier in the same
//! pass. This sequential bias is part of the simulation's semantics (it is
//! what the per-body update loop produces) and is pinned by a test; do not
//! "fix" it by buffering accelerations.

use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{Body, NVec2, System};

/// Advance a single body by one timestep given every other body.
///
/// `others` must yield every body in the system except `body` itself; the
/// self-exclusion the original loop did with an identity check is encoded
/// here by handing in disjoint borrows.
pub fn update_position<'a>(
    body: &mut Body,
    others: impl IntoIterator<Item = &'a Body>,
    gravity: &NewtonianGravity,
    params: &Parameters,
) {
    // Net force from all other bodies at their current positions.
    let mut net = NVec2::zeros();
    for other in others {
        net += gravity.pairwise_attraction(body, other);
    }

    // F = m a, so a = F / m; kick the velocity by a full step first...
    body.v += net / body.m * params.timestep;

    // ...then drift the position with the updated velocity.
    body.x += body.v * params.timestep;

    body.trail.push_back(body.x);
    if let Some(cap) = params.trail_limit {
        while body.trail.len() > cap {
            body.trail.pop_front();
        }
    }
}

/// Advance the whole system by one timestep.
///
/// Calls [`update_position`] for each body in index order and bumps `sys.t`.
pub fn euler_step(sys: &mut System, gravity: &NewtonianGravity, params: &Parameters) {
    for i in 0..sys.bodies.len() {
        // Split the list so body i is mutable while the rest stay readable:
        // `updated` holds bodies already moved this frame, `pending` the
        // ones still at their start-of-frame positions.
        let (updated, rest) = sys.bodies.split_at_mut(i);
        let (body, pending) = match rest.split_first_mut() {
            Some(split) => split,
            None => break,
        };

        update_position(body, updated.iter().chain(pending.iter()), gravity, params);
    }

    sys.t += params.timestep;
}
