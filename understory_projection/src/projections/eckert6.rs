// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Point;

use crate::geo::GeoPoint;
use crate::projection::Projection;
use crate::solve::{NewtonSolve, capped_newton};

/// `1 + π/2`: relates the auxiliary angle to the sine of the latitude.
const J: f64 = 1.0 + FRAC_PI_2;

/// Eckert VI pseudocylindrical equal-area projection.
///
/// The forward direction solves `θ + sin θ = (1 + π/2) sin φ` for the
/// auxiliary angle `θ` with at most [`Eckert6::MAX_ITERATIONS`] Newton steps;
/// the inverse is closed form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eckert6;

impl Eckert6 {
    /// Iteration cap for the forward solve.
    pub const MAX_ITERATIONS: u32 = 10;
    /// The forward solve stops once a correction is no larger than this.
    pub const TOLERANCE: f64 = 1e-5;

    /// Solves for the auxiliary angle used by [`Projection::project`].
    ///
    /// The iteration starts from `phi` itself. Stopping at the cap without
    /// converging is accepted and the last iterate is used.
    #[must_use]
    pub fn auxiliary_latitude(phi: f64) -> NewtonSolve {
        let target = J * libm::sin(phi);
        capped_newton(phi, Self::MAX_ITERATIONS, Self::TOLERANCE, |theta| {
            (theta + libm::sin(theta) - target) / (1.0 + libm::cos(theta))
        })
    }
}

impl Projection for Eckert6 {
    fn name(&self) -> &'static str {
        "Eckert6"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        let theta = Self::auxiliary_latitude(phi).value;
        let norm = libm::sqrt(2.0 + PI);
        Point::new(lambda * (1.0 + libm::cos(theta)) / norm, 2.0 * theta / norm)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let k = libm::sqrt(J / 2.0);
        // Scale first; both trig terms below take the scaled value.
        let y = y * k;
        GeoPoint::new(
            x * 2.0 * k / (1.0 + libm::cos(y)),
            libm::asin((y + libm::sin(y)) / J),
        )
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::Eckert6;
    use crate::projection::Projection;

    #[test]
    fn origin_maps_to_origin() {
        let p = Eckert6.project(0.0, 0.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);

        let solve = Eckert6::auxiliary_latitude(0.0);
        assert_eq!(solve.iterations, 1);
        assert!(solve.converged);
    }

    #[test]
    fn iteration_count_never_exceeds_the_cap() {
        let inputs = [
            -FRAC_PI_2,
            -1.2,
            -0.3,
            0.0,
            0.7,
            1.5,
            FRAC_PI_2,
            PI,
            50.0,
            -1e6,
            f64::INFINITY,
            f64::NAN,
        ];
        for phi in inputs {
            let solve = Eckert6::auxiliary_latitude(phi);
            assert!(solve.iterations <= Eckert6::MAX_ITERATIONS, "phi = {phi}");
        }
    }

    #[test]
    fn pole_is_a_fixed_point_of_the_solve() {
        // θ = π/2 satisfies θ + sin θ = 1 + π/2 exactly.
        let solve = Eckert6::auxiliary_latitude(FRAC_PI_2);
        assert!(solve.converged);
        assert!((solve.value - FRAC_PI_2).abs() < 1e-12);

        let p = Eckert6.project(PI, FRAC_PI_2);
        let norm = libm::sqrt(2.0 + PI);
        assert!((p.x - PI / norm).abs() < 1e-12);
        assert!((p.y - PI / norm).abs() < 1e-12);
    }

    #[test]
    fn degenerate_input_terminates() {
        // At θ = π the Newton denominator is zero; the solve still stops.
        let solve = Eckert6::auxiliary_latitude(PI);
        assert!(solve.iterations <= Eckert6::MAX_ITERATIONS);
        assert!(!solve.converged);
    }

    #[test]
    fn odd_symmetry_in_both_axes() {
        for &(lambda, phi) in &[(0.3, 0.2), (2.5, 1.1), (PI, 0.9), (1.0, -1.4)] {
            let p = Eckert6.project(lambda, phi);
            let mirrored_x = Eckert6.project(-lambda, phi);
            let mirrored_y = Eckert6.project(lambda, -phi);
            assert!((mirrored_x.x + p.x).abs() < 1e-12);
            assert!((mirrored_y.y + p.y).abs() < 1e-12);
        }
    }

    #[test]
    fn out_of_image_unproject_is_nan() {
        let g = Eckert6.unproject(0.0, 10.0);
        assert!(g.latitude.is_nan());
    }
}
