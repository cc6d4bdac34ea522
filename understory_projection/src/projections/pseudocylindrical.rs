// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use kurbo::Point;

use crate::geo::GeoPoint;
use crate::projection::Projection;
use crate::solve::capped_newton;

/// Mollweide elliptical equal-area projection.
///
/// The forward direction solves `2θ + sin 2θ = π sin φ` with at most
/// [`Mollweide::MAX_ITERATIONS`] Newton steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mollweide;

impl Mollweide {
    /// Iteration cap for the forward solve.
    pub const MAX_ITERATIONS: u32 = 30;
    /// The forward solve stops once a correction is no larger than this.
    pub const TOLERANCE: f64 = 1e-6;

    const CX: f64 = SQRT_2 / FRAC_PI_2;
    const CY: f64 = SQRT_2;

    fn theta(phi: f64) -> f64 {
        let target = PI * libm::sin(phi);
        let solve = capped_newton(phi, Self::MAX_ITERATIONS, Self::TOLERANCE, |t| {
            (t + libm::sin(t) - target) / (1.0 + libm::cos(t))
        });
        solve.value / 2.0
    }
}

impl Projection for Mollweide {
    fn name(&self) -> &'static str {
        "Mollweide"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        let theta = Self::theta(phi);
        Point::new(
            Self::CX * lambda * libm::cos(theta),
            Self::CY * libm::sin(theta),
        )
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let theta = libm::asin(y / Self::CY);
        GeoPoint::new(
            x / (Self::CX * libm::cos(theta)),
            libm::asin((2.0 * theta + libm::sin(2.0 * theta)) / PI),
        )
    }
}

/// Equal Earth pseudocylindrical equal-area projection (Šavrič, Patterson, Jenny 2018).
///
/// The forward direction is a polynomial in the parametric latitude; the
/// inverse inverts that polynomial with Newton steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EqualEarth;

impl EqualEarth {
    /// Iteration cap for the inverse solve.
    pub const MAX_ITERATIONS: u32 = 12;
    /// The inverse solve stops once a correction is no larger than this.
    pub const TOLERANCE: f64 = 1e-12;

    const A1: f64 = 1.340264;
    const A2: f64 = -0.081106;
    const A3: f64 = 0.000893;
    const A4: f64 = 0.003796;
    // sqrt(3) / 2
    const M: f64 = 0.866_025_403_784_438_6;

    fn y_of(l: f64) -> f64 {
        let l2 = l * l;
        let l6 = l2 * l2 * l2;
        l * (Self::A1 + Self::A2 * l2 + l6 * (Self::A3 + Self::A4 * l2))
    }

    // Derivative of `y_of`; also the denominator of the x scale.
    fn dy_of(l: f64) -> f64 {
        let l2 = l * l;
        let l6 = l2 * l2 * l2;
        Self::A1 + 3.0 * Self::A2 * l2 + l6 * (7.0 * Self::A3 + 9.0 * Self::A4 * l2)
    }
}

impl Projection for EqualEarth {
    fn name(&self) -> &'static str {
        "EqualEarth"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        let l = libm::asin(Self::M * libm::sin(phi));
        Point::new(
            lambda * libm::cos(l) / (Self::M * Self::dy_of(l)),
            Self::y_of(l),
        )
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let l = capped_newton(y, Self::MAX_ITERATIONS, Self::TOLERANCE, |l| {
            (Self::y_of(l) - y) / Self::dy_of(l)
        })
        .value;
        GeoPoint::new(
            Self::M * x * Self::dy_of(l) / libm::cos(l),
            libm::asin(libm::sin(l) / Self::M),
        )
    }
}

/// Natural Earth I compromise projection (Šavrič, Jenny, Patterson 2011).
///
/// Neither conformal nor equal-area; polynomial forward direction with a
/// Newton inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalEarth1;

impl NaturalEarth1 {
    /// Iteration cap for the inverse solve.
    pub const MAX_ITERATIONS: u32 = 25;
    /// The inverse solve stops once a correction is no larger than this.
    pub const TOLERANCE: f64 = 1e-6;

    fn x_scale(phi: f64) -> f64 {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        0.8707 - 0.131979 * phi2 + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4))
    }

    fn y_of(phi: f64) -> f64 {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        phi * (1.007226 + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)))
    }

    fn dy_of(phi: f64) -> f64 {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        1.007226
            + phi2
                * (0.015085 * 3.0
                    + phi4 * (-0.044475 * 7.0 + 0.028874 * 9.0 * phi2 - 0.005916 * 11.0 * phi4))
    }
}

impl Projection for NaturalEarth1 {
    fn name(&self) -> &'static str {
        "NaturalEarth1"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        Point::new(lambda * Self::x_scale(phi), Self::y_of(phi))
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let phi = capped_newton(y, Self::MAX_ITERATIONS, Self::TOLERANCE, |phi| {
            (Self::y_of(phi) - y) / Self::dy_of(phi)
        })
        .value;
        GeoPoint::new(x / Self::x_scale(phi), phi)
    }
}
