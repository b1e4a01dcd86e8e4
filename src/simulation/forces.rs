//! Gravitational force law.
//!
//! `NewtonianGravity` computes the pairwise attraction between two bodies
//! following Newton's law of universal gravitation, decomposed into x/y
//! components through the angle of the displacement vector. This is the
//! whole force model: the simulation has exactly one force law and no
//! pluggable terms.

use crate::simulation::states::{Body, NVec2};

/// Direct Newtonian gravity with a minimum-separation clamp.
///
/// The clamp replaces the division-by-zero hazard of two coincident bodies:
/// any separation below `min_separation` is treated as `min_separation`, so
/// the force stays large but finite and every run of the same state computes
/// the same value. The recorded anchor distance is NOT clamped; the readout
/// always shows the true separation.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // clamp floor for the force distance, meters
}

impl NewtonianGravity {
    /// Force exerted on `body` by `other`, as an (x, y) vector in newtons.
    ///
    /// Side effect: when `other` is the anchor body, the Euclidean distance
    /// between the two is stored into `body.distance_to_anchor` for the
    /// display layer. The two bodies must be distinct; callers guarantee
    /// this by construction.
    pub fn pairwise_attraction(&self, body: &mut Body, other: &Body) -> NVec2 {
        // Displacement from body to other. The force on `body` points along
        // this vector (attraction).
        let d = other.x - body.x;
        let distance = d.norm();

        if other.anchor {
            body.distance_to_anchor = distance;
        }

        // Zero-distance policy: floor the separation before squaring.
        let distance = distance.max(self.min_separation);

        // F = G m1 m2 / r^2
        let force = self.g * body.m * other.m / (distance * distance);

        // Split the scalar force along the displacement angle.
        // atan2(0, 0) is defined (0), so coincident bodies still get a
        // deterministic direction.
        let theta = d.y.atan2(d.x);
        NVec2::new(theta.cos() * force, theta.sin() * force)
    }
}
