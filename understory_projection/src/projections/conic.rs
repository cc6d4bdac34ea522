// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::Point;

use crate::geo::{GeoPoint, RADIANS};
use crate::projection::Projection;

/// Below this cone constant the conic degenerates into a cylinder.
const MIN_CONE_CONSTANT: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Form {
    Conic { n: f64, c: f64, r0: f64 },
    // Parallels symmetric about the equator.
    Cylindrical { cos_phi0: f64 },
}

/// Albers conic equal-area projection with two standard parallels.
///
/// The default parallels, 29.5°N and 45.5°N, suit the contiguous United
/// States. When the parallels are symmetric about the equator the cone
/// flattens into a cylindrical equal-area projection, which is used instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Albers {
    parallels: (f64, f64),
    form: Form,
}

impl Albers {
    /// Creates the projection from standard parallels in radians.
    #[must_use]
    pub fn new(phi0: f64, phi1: f64) -> Self {
        let sin_phi0 = libm::sin(phi0);
        let n = (sin_phi0 + libm::sin(phi1)) / 2.0;
        let form = if n.abs() < MIN_CONE_CONSTANT {
            Form::Cylindrical {
                cos_phi0: libm::cos(phi0),
            }
        } else {
            let c = 1.0 + sin_phi0 * (2.0 * n - sin_phi0);
            Form::Conic {
                n,
                c,
                r0: libm::sqrt(c) / n,
            }
        };
        Self {
            parallels: (phi0, phi1),
            form,
        }
    }

    /// Creates the projection from standard parallels in degrees.
    #[must_use]
    pub fn from_degrees(phi0: f64, phi1: f64) -> Self {
        Self::new(phi0 * RADIANS, phi1 * RADIANS)
    }

    /// Returns the standard parallels in radians.
    #[must_use]
    pub fn parallels(&self) -> (f64, f64) {
        self.parallels
    }
}

impl Default for Albers {
    fn default() -> Self {
        Self::from_degrees(29.5, 45.5)
    }
}

impl Projection for Albers {
    fn name(&self) -> &'static str {
        "Albers"
    }

    fn project(&self, lambda: f64, phi: f64) -> Point {
        match self.form {
            Form::Conic { n, c, r0 } => {
                let r = libm::sqrt(c - 2.0 * n * libm::sin(phi)) / n;
                let theta = lambda * n;
                Point::new(r * libm::sin(theta), r0 - r * libm::cos(theta))
            }
            Form::Cylindrical { cos_phi0 } => {
                Point::new(lambda * cos_phi0, libm::sin(phi) / cos_phi0)
            }
        }
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        match self.form {
            Form::Conic { n, c, r0 } => {
                let r0y = r0 - y;
                let mut theta = libm::atan2(x, r0y.abs()) * sign(r0y);
                if r0y * n < 0.0 {
                    theta -= PI * sign(x) * sign(r0y);
                }
                GeoPoint::new(
                    theta / n,
                    libm::asin((c - (x * x + r0y * r0y) * n * n) / (2.0 * n)),
                )
            }
            Form::Cylindrical { cos_phi0 } => {
                GeoPoint::new(x / cos_phi0, libm::asin(y * cos_phi0))
            }
        }
    }
}

// Unlike `f64::signum`, zero maps to zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
