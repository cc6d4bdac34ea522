// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spherical rotation applied ahead of a projection.

use core::f64::consts::{PI, TAU};

use crate::geo::{GeoPoint, RADIANS};

/// A rotation of the sphere, in radians.
///
/// Points are first rotated by `delta_lambda` about the polar axis, then by
/// `delta_phi` about the axis through `(π/2, 0)`, then by `delta_gamma`
/// about the axis through `(0, 0)`. [`Rotation::invert`] applies the steps
/// in reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Longitude shift.
    pub delta_lambda: f64,
    /// Latitude tilt.
    pub delta_phi: f64,
    /// Roll around the view axis.
    pub delta_gamma: f64,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a rotation from angles in radians.
    #[must_use]
    pub const fn new(delta_lambda: f64, delta_phi: f64, delta_gamma: f64) -> Self {
        Self {
            delta_lambda,
            delta_phi,
            delta_gamma,
        }
    }

    /// Creates a rotation from angles in degrees.
    #[must_use]
    pub fn from_degrees(delta_lambda: f64, delta_phi: f64, delta_gamma: f64) -> Self {
        Self::new(
            delta_lambda * RADIANS,
            delta_phi * RADIANS,
            delta_gamma * RADIANS,
        )
    }

    /// Returns `true` if every angle is zero.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.delta_lambda == 0.0 && self.delta_phi == 0.0 && self.delta_gamma == 0.0
    }

    /// Rotates a point given in radians.
    #[must_use]
    pub fn rotate(&self, geo: GeoPoint) -> GeoPoint {
        let lambda = shift_longitude(geo.longitude, self.delta_lambda);
        if self.delta_phi == 0.0 && self.delta_gamma == 0.0 {
            return GeoPoint::new(lambda, geo.latitude);
        }

        let (x, y, z) = cartesian(lambda, geo.latitude);
        let (sin_dphi, cos_dphi) = sin_cos(self.delta_phi);
        let (sin_dgamma, cos_dgamma) = sin_cos(self.delta_gamma);
        let k = z * cos_dphi + x * sin_dphi;
        GeoPoint::new(
            libm::atan2(y * cos_dgamma - k * sin_dgamma, x * cos_dphi - z * sin_dphi),
            clamped_asin(k * cos_dgamma + y * sin_dgamma),
        )
    }

    /// Undoes [`Rotation::rotate`] for a point given in radians.
    #[must_use]
    pub fn invert(&self, geo: GeoPoint) -> GeoPoint {
        let (lambda, phi) = if self.delta_phi == 0.0 && self.delta_gamma == 0.0 {
            (geo.longitude, geo.latitude)
        } else {
            let (x, y, z) = cartesian(geo.longitude, geo.latitude);
            let (sin_dphi, cos_dphi) = sin_cos(self.delta_phi);
            let (sin_dgamma, cos_dgamma) = sin_cos(self.delta_gamma);
            let k = z * cos_dgamma - y * sin_dgamma;
            (
                libm::atan2(y * cos_dgamma + z * sin_dgamma, x * cos_dphi + k * sin_dphi),
                clamped_asin(k * cos_dphi - x * sin_dphi),
            )
        };
        GeoPoint::new(shift_longitude(lambda, -self.delta_lambda), phi)
    }
}

fn shift_longitude(lambda: f64, delta: f64) -> f64 {
    let shifted = lambda + delta;
    if shifted > PI {
        shifted - TAU
    } else if shifted < -PI {
        shifted + TAU
    } else {
        shifted
    }
}

fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

fn cartesian(lambda: f64, phi: f64) -> (f64, f64, f64) {
    let cos_phi = libm::cos(phi);
    (
        libm::cos(lambda) * cos_phi,
        libm::sin(lambda) * cos_phi,
        libm::sin(phi),
    )
}

// Rounding can push a unit-vector component just past ±1.
fn clamped_asin(value: f64) -> f64 {
    libm::asin(value.clamp(-1.0, 1.0))
}
